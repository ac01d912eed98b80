//! Type-ahead suggestions: places, provinces and categories whose localized
//! name is close to the query. No boosts, no filters.
use tripsearch_core::traits::{Localized, Scorer};
use tripsearch_core::types::{Language, SearchQuery, SearchSuggestion, SuggestionKind};

use crate::engine::{sort_by_confidence, RankingEngine};

const SUGGESTION_THRESHOLD: f64 = 0.4;

fn named_suggestion(kind: SuggestionKind, id: &str, text: &str, description: &str, confidence: f64) -> SearchSuggestion {
    SearchSuggestion {
        id: format!("{}-{}", kind.as_str(), id),
        kind,
        text: text.to_string(),
        description: description.to_string(),
        confidence,
        province: None,
        category: None,
        image: None,
    }
}

impl<S: Scorer> RankingEngine<S> {
    /// Suggestions for a non-empty query, best first, at most `max_suggestions`.
    /// A query made only of whitespace still counts as non-empty.
    pub fn suggest(&self, query: &SearchQuery) -> Vec<SearchSuggestion> {
        if query.query.is_empty() {
            return Vec::new();
        }
        let lang = query.language;
        let mut suggestions = self.place_suggestions(&query.query, lang);
        suggestions.extend(self.named_suggestions(&query.query, lang));
        sort_by_confidence(&mut suggestions, |s| s.confidence);
        suggestions.truncate(self.settings.max_suggestions);
        suggestions
    }

    fn place_suggestions(&self, q: &str, lang: Language) -> Vec<SearchSuggestion> {
        self.catalog
            .places
            .iter()
            .filter_map(|place| {
                let name = place.name_in(lang);
                let confidence = self.scorer.score(q, name);
                if confidence <= SUGGESTION_THRESHOLD {
                    return None;
                }
                let province = place.province_in(lang);
                Some(SearchSuggestion {
                    province: Some(province.to_string()),
                    category: Some(place.category.clone()),
                    image: Some(place.image.clone()),
                    ..named_suggestion(SuggestionKind::Place, &place.id, name, province, confidence)
                })
            })
            .collect()
    }

    fn named_suggestions(&self, q: &str, lang: Language) -> Vec<SearchSuggestion> {
        let tables = self.lexicon.tables(lang);
        let provinces = self
            .catalog
            .provinces
            .iter()
            .map(|p| (SuggestionKind::Province, p.id.as_str(), p.name_in(lang), tables.province_label.as_str()));
        let categories = self
            .catalog
            .categories
            .iter()
            .map(|c| (SuggestionKind::Category, c.id.as_str(), c.name_in(lang), tables.category_label.as_str()));
        provinces
            .chain(categories)
            .filter_map(|(kind, id, text, label)| {
                let confidence = self.scorer.score(q, text);
                (confidence > SUGGESTION_THRESHOLD).then(|| named_suggestion(kind, id, text, label, confidence))
            })
            .collect()
    }
}
