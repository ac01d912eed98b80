//! Domain types shared by the text and ranking crates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::traits::Localized;

pub type PlaceId = String;

/// Language of a query and of the fields it is compared against.
///
/// Only Thai has its own localized fields; every other code, including
/// unknown ones, takes the English path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Language {
    Th,
    #[default]
    En,
}

impl Language {
    pub fn from_code(code: &str) -> Self {
        match code {
            "th" => Language::Th,
            _ => Language::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Th => "th",
            Language::En => "en",
        }
    }
}

impl From<String> for Language {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

impl From<Language> for String {
    fn from(lang: Language) -> Self {
        lang.code().to_string()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A catalog entry. Loaded once, never mutated.
///
/// - `name`/`province`/`tags`: canonical (English) fields
/// - `name_local`/`province_local`/`tags_local`: Thai fields
/// - `description`: language code -> text, expected to hold both `th` and `en`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub id: PlaceId,
    pub name: String,
    pub name_local: String,
    pub province: String,
    pub province_local: String,
    pub category: String,
    pub tags: Vec<String>,
    pub tags_local: Vec<String>,
    pub rating: f64,
    pub review_count: u32,
    pub image: String,
    pub description: BTreeMap<String, String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
}

/// The fields of a place as seen from one language.
#[derive(Debug, Clone, Copy)]
pub struct PlaceView<'a> {
    pub record: &'a PlaceRecord,
    pub name: &'a str,
    pub province: &'a str,
    pub tags: &'a [String],
    pub description: &'a str,
}

impl PlaceRecord {
    pub fn view(&self, lang: Language) -> Result<PlaceView<'_>> {
        let description = self.description.get(lang.code()).ok_or_else(|| Error::MissingLanguageData {
            place_id: self.id.clone(),
            language: lang.code().to_string(),
        })?;
        Ok(PlaceView {
            record: self,
            name: self.name_in(lang),
            province: self.province_in(lang),
            tags: self.tags_in(lang),
            description,
        })
    }

    pub fn province_in(&self, lang: Language) -> &str {
        match lang {
            Language::Th => &self.province_local,
            Language::En => &self.province,
        }
    }

    pub fn tags_in(&self, lang: Language) -> &[String] {
        match lang {
            Language::Th => &self.tags_local,
            Language::En => &self.tags,
        }
    }
}

impl Localized for PlaceRecord {
    fn name_in(&self, lang: Language) -> &str {
        match lang {
            Language::Th => &self.name_local,
            Language::En => &self.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvinceRecord {
    pub id: String,
    pub name: String,
    pub name_local: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: String,
    pub name: String,
    pub name_local: String,
}

macro_rules! localized_name {
    ($($ty:ty),*) => {$(
        impl Localized for $ty {
            fn name_in(&self, lang: Language) -> &str {
                match lang {
                    Language::Th => &self.name_local,
                    Language::En => &self.name,
                }
            }
        }
    )*};
}

localized_name!(ProvinceRecord, CategoryRecord);

/// Optional result filters. An empty list means the filter is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchFilters {
    pub provinces: Vec<String>,
    pub categories: Vec<String>,
    pub amenities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub filters: SearchFilters,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>, language: Language) -> Self {
        Self { query: query.into(), language, filters: SearchFilters::default() }
    }

    pub fn with_filters(mut self, filters: SearchFilters) -> Self {
        self.filters = filters;
        self
    }
}

/// Coarse classification of a query, computed once per search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryIntent {
    pub location_focused: bool,
    pub category_focused: bool,
    pub activity_focused: bool,
    /// Category and activity keywords found in the query, in table order.
    /// A word present in both tables shows up twice.
    pub keywords: Vec<String>,
    pub expanded_terms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: PlaceId,
    pub name: String,
    pub name_local: String,
    pub province: String,
    pub category: String,
    pub tags: Vec<String>,
    pub rating: f64,
    pub review_count: u32,
    pub image: String,
    pub description: String,
    pub confidence: f64,
    pub matched_terms: Vec<String>,
    pub amenities: Vec<String>,
    pub location: Option<GeoPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Place,
    Province,
    Category,
}

impl SuggestionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SuggestionKind::Place => "place",
            SuggestionKind::Province => "province",
            SuggestionKind::Category => "category",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSuggestion {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub text: String,
    pub description: String,
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub results: Vec<SearchResult>,
    pub suggestions: Vec<SearchSuggestion>,
}

/// Envelope handed to request handlers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    pub suggestions: Vec<SearchSuggestion>,
    pub total_count: usize,
    pub query: String,
}

impl SearchResponse {
    pub fn new(query: impl Into<String>, outcome: SearchOutcome) -> Self {
        let SearchOutcome { results, suggestions } = outcome;
        Self { total_count: results.len(), query: query.into(), results, suggestions }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place() -> PlaceRecord {
        PlaceRecord {
            id: "x".into(),
            name: "Wat Arun".into(),
            name_local: "วัดอรุณ".into(),
            province: "Bangkok".into(),
            province_local: "กรุงเทพฯ".into(),
            category: "Culture".into(),
            tags: vec!["Temple".into()],
            tags_local: vec!["วัด".into()],
            rating: 4.6,
            review_count: 10,
            image: String::new(),
            description: BTreeMap::from([("en".to_string(), "Temple of dawn".to_string())]),
            amenities: vec![],
            location: None,
        }
    }

    #[test]
    fn unknown_language_codes_fall_back_to_english() {
        assert_eq!(Language::from_code("th"), Language::Th);
        assert_eq!(Language::from_code("en"), Language::En);
        assert_eq!(Language::from_code("fr"), Language::En);
        assert_eq!(Language::from_code("TH"), Language::En);
        let q: SearchQuery = serde_json::from_str(r#"{"query":"x","language":"de"}"#).unwrap();
        assert_eq!(q.language, Language::En);
    }

    #[test]
    fn query_text_defaults_to_empty() {
        let q: SearchQuery = serde_json::from_str(r#"{"language":"th","filters":{"provinces":["Krabi"]}}"#).unwrap();
        assert_eq!(q.query, "");
        assert_eq!(q.language, Language::Th);
        assert_eq!(q.filters.provinces, ["Krabi"]);
    }

    #[test]
    fn response_counts_its_results() {
        let response = SearchResponse::new("krabi", SearchOutcome::default());
        assert_eq!(response.total_count, 0);
        assert_eq!(response.query, "krabi");
        let v = serde_json::to_value(&response).unwrap();
        assert_eq!(v["totalCount"], 0);
        assert!(v["results"].as_array().is_some_and(|r| r.is_empty()));
    }

    #[test]
    fn view_selects_fields_by_language() {
        let p = place();
        let en = p.view(Language::En).unwrap();
        assert_eq!(en.name, "Wat Arun");
        assert_eq!(en.province, "Bangkok");
        assert_eq!(en.tags, ["Temple".to_string()]);
        assert_eq!(en.description, "Temple of dawn");
    }

    #[test]
    fn view_reports_missing_description() {
        let err = place().view(Language::Th).unwrap_err();
        match err {
            Error::MissingLanguageData { place_id, language } => {
                assert_eq!(place_id, "x");
                assert_eq!(language, "th");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn suggestion_serializes_kind_as_type() {
        let s = SearchSuggestion {
            id: "province-krabi".into(),
            kind: SuggestionKind::Province,
            text: "Krabi".into(),
            description: "Province".into(),
            confidence: 1.0,
            province: None,
            category: None,
            image: None,
        };
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["type"], "province");
        assert!(v.get("image").is_none());
    }
}
