use crate::error::Result;
use crate::types::{Language, SearchOutcome, SearchQuery, SearchSuggestion};

/// Similarity between a query and a target string, in `[0, 1]`.
pub trait Scorer: Send + Sync {
    fn score(&self, query: &str, target: &str) -> f64;
}

/// Records that carry a canonical and a Thai display name.
pub trait Localized {
    fn name_in(&self, lang: Language) -> &str;
}

pub trait SearchEngine: Send + Sync {
    fn search(&self, query: &SearchQuery) -> Result<SearchOutcome>;
    fn suggest(&self, query: &SearchQuery) -> Vec<SearchSuggestion>;
}
