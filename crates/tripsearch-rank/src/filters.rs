//! Result filters. Every present filter must pass; values compare
//! case-insensitively against the canonical (non-localized) fields.
use tripsearch_core::types::{PlaceRecord, SearchFilters};

fn same(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

fn accepts(accepted: &[String], value: &str) -> bool {
    accepted.is_empty() || accepted.iter().any(|a| same(a, value))
}

pub fn passes(filters: &SearchFilters, place: &PlaceRecord) -> bool {
    accepts(&filters.provinces, &place.province)
        && accepts(&filters.categories, &place.category)
        && (filters.amenities.is_empty()
            || filters.amenities.iter().any(|want| place.amenities.iter().any(|have| same(want, have))))
}
