use rayon::prelude::*;
use std::cmp::Ordering;
use std::env;
use std::sync::Arc;
use tracing::{debug, trace};

use tripsearch_core::config::{resolve_with_base, Config, SearchSettings};
use tripsearch_core::traits::{Scorer, SearchEngine};
use tripsearch_core::types::{
    Language, PlaceRecord, QueryIntent, SearchOutcome, SearchQuery, SearchResponse, SearchResult, SearchSuggestion,
};
use tripsearch_core::{Catalog, Lexicon, Result};
use tripsearch_text::FuzzyMatcher;

use crate::filters;
use crate::intent::IntentAnalyzer;
use crate::synonyms::SynonymExpander;

const DESCRIPTION_WEIGHT: f64 = 0.7;
const PROVINCE_WEIGHT: f64 = 0.6;
const TAG_WEIGHT: f64 = 0.8;
const CATEGORY_BOOST: f64 = 1.2;
const LOCATION_BOOST: f64 = 1.1;
/// Province score a location-focused query needs before the location boost applies.
const LOCATION_BOOST_FLOOR: f64 = 0.5;
/// Places at or below this confidence are dropped.
const RESULT_THRESHOLD: f64 = 0.3;
const MATCHED_TERM_THRESHOLD: f64 = 0.3;

/// Linear-scan ranker over an immutable catalog.
///
/// Catalog and lexicon sit behind `Arc`s, so one engine can serve any number
/// of threads without locking.
pub struct RankingEngine<S = FuzzyMatcher> {
    pub(crate) catalog: Arc<Catalog>,
    pub(crate) lexicon: Arc<Lexicon>,
    pub(crate) settings: SearchSettings,
    pub(crate) scorer: S,
}

impl RankingEngine<FuzzyMatcher> {
    pub fn new(catalog: Arc<Catalog>, lexicon: Arc<Lexicon>) -> Self {
        Self { catalog, lexicon, settings: SearchSettings::default(), scorer: FuzzyMatcher }
    }

    /// Engine over the dataset and keyword tables bundled with the crates.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(Arc::new(Catalog::builtin()?), Arc::new(Lexicon::builtin()?)))
    }

    /// Engine configured from the `[search]` table. Relative catalog and
    /// lexicon paths resolve against the working directory.
    pub fn from_config(config: &Config) -> Result<Self> {
        let settings = config.search_settings()?;
        let base = env::current_dir()?;
        let catalog = match &settings.catalog_path {
            Some(path) => Catalog::from_json_file(&resolve_with_base(&base, path))?,
            None => Catalog::builtin()?,
        };
        let lexicon = match &settings.lexicon_path {
            Some(path) => Lexicon::from_toml_file(&resolve_with_base(&base, path))?,
            None => Lexicon::builtin()?,
        };
        Ok(Self::new(Arc::new(catalog), Arc::new(lexicon)).with_settings(settings))
    }
}

impl<S: Scorer> RankingEngine<S> {
    pub fn with_settings(mut self, settings: SearchSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_scorer<T: Scorer>(self, scorer: T) -> RankingEngine<T> {
        RankingEngine { catalog: self.catalog, lexicon: self.lexicon, settings: self.settings, scorer }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    pub fn expand(&self, query: &str, lang: Language) -> Vec<String> {
        SynonymExpander::new(&self.lexicon).expand(query, lang)
    }

    pub fn analyze(&self, query: &str, lang: Language) -> QueryIntent {
        IntentAnalyzer::new(&self.lexicon).analyze(query, lang)
    }

    pub fn trending(&self, lang: Language) -> &[String] {
        &self.lexicon.tables(lang).trending
    }

    /// Ranked results plus ranked suggestions for one query.
    pub fn search(&self, query: &SearchQuery) -> Result<SearchOutcome> {
        let intent = self.analyze(&query.query, query.language);
        let results = self.rank(query, &intent)?;
        let suggestions = self.suggest(query);
        debug!(
            query = %query.query,
            language = %query.language,
            location = intent.location_focused,
            category = intent.category_focused,
            activity = intent.activity_focused,
            results = results.len(),
            suggestions = suggestions.len(),
            "search finished"
        );
        Ok(SearchOutcome { results, suggestions })
    }

    /// Independent searches spread over the rayon pool; output order follows input order.
    pub fn search_many(&self, queries: &[SearchQuery]) -> Vec<Result<SearchOutcome>> {
        queries.par_iter().map(|q| self.search(q)).collect()
    }

    /// `search` wrapped in the envelope handed to request handlers.
    pub fn respond(&self, query: &SearchQuery) -> Result<SearchResponse> {
        Ok(SearchResponse::new(query.query.as_str(), self.search(query)?))
    }

    /// Scores every place, keeps those above the threshold that pass the
    /// filters, and returns the best `max_results` by descending confidence.
    pub fn rank(&self, query: &SearchQuery, intent: &QueryIntent) -> Result<Vec<SearchResult>> {
        let mut results = Vec::new();
        for place in &self.catalog.places {
            if let Some(result) = self.score_place(query, intent, place)? {
                results.push(result);
            }
        }
        sort_by_confidence(&mut results, |r| r.confidence);
        results.truncate(self.settings.max_results);
        Ok(results)
    }

    fn score_place(&self, query: &SearchQuery, intent: &QueryIntent, place: &PlaceRecord) -> Result<Option<SearchResult>> {
        let view = place.view(query.language)?;
        let q = query.query.as_str();

        let name_score = self.scorer.score(q, view.name);
        let description_score = self.scorer.score(q, view.description) * DESCRIPTION_WEIGHT;
        let province_score = self.scorer.score(q, view.province) * PROVINCE_WEIGHT;
        let tag_score = view
            .tags
            .iter()
            .flat_map(|tag| intent.expanded_terms.iter().map(move |term| self.scorer.score(term, tag)))
            .fold(0.0, f64::max)
            * TAG_WEIGHT;

        let mut confidence = name_score.max(description_score).max(tag_score).max(province_score);
        if intent.category_focused && intent.keywords.iter().any(|k| view.tags.contains(k)) {
            confidence *= CATEGORY_BOOST;
        }
        if intent.location_focused && province_score > LOCATION_BOOST_FLOOR {
            confidence *= LOCATION_BOOST;
        }

        if confidence <= RESULT_THRESHOLD {
            return Ok(None);
        }
        if !filters::passes(&query.filters, place) {
            trace!(place = %place.id, confidence, "filtered out");
            return Ok(None);
        }

        let mut matched_terms = Vec::new();
        if name_score > MATCHED_TERM_THRESHOLD {
            matched_terms.push(view.name.to_string());
        }
        matched_terms.extend(
            view.tags
                .iter()
                .filter(|tag| self.scorer.score(q, tag) > MATCHED_TERM_THRESHOLD)
                .cloned(),
        );

        Ok(Some(SearchResult {
            id: place.id.clone(),
            name: place.name.clone(),
            name_local: place.name_local.clone(),
            province: view.province.to_string(),
            category: place.category.clone(),
            tags: view.tags.to_vec(),
            rating: place.rating,
            review_count: place.review_count,
            image: place.image.clone(),
            description: view.description.to_string(),
            confidence: confidence.min(1.0),
            matched_terms,
            amenities: place.amenities.clone(),
            location: place.location,
        }))
    }
}

/// Stable sort, highest confidence first; equal scores keep catalog order.
pub(crate) fn sort_by_confidence<T>(items: &mut [T], confidence: impl Fn(&T) -> f64) {
    items.sort_by(|a, b| confidence(b).partial_cmp(&confidence(a)).unwrap_or(Ordering::Equal));
}

impl<S: Scorer> SearchEngine for RankingEngine<S> {
    fn search(&self, query: &SearchQuery) -> Result<SearchOutcome> {
        Self::search(self, query)
    }

    fn suggest(&self, query: &SearchQuery) -> Vec<SearchSuggestion> {
        Self::suggest(self, query)
    }
}
