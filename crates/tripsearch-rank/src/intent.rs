//! Coarse query intent from the per-language keyword tables.
use tripsearch_core::types::{Language, QueryIntent};
use tripsearch_core::Lexicon;

use crate::synonyms::SynonymExpander;

pub struct IntentAnalyzer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> IntentAnalyzer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn analyze(&self, query: &str, lang: Language) -> QueryIntent {
        let tables = self.lexicon.tables(lang);
        let lowered = query.to_lowercase();
        let found = |word: &String| lowered.contains(word.as_str());

        let mut intent = QueryIntent {
            expanded_terms: SynonymExpander::new(self.lexicon).expand(query, lang),
            location_focused: tables.location_words.iter().any(found),
            ..QueryIntent::default()
        };
        for keyword in tables.category_keywords.iter().filter(|k| found(*k)) {
            intent.category_focused = true;
            intent.keywords.push(keyword.clone());
        }
        for keyword in tables.activity_keywords.iter().filter(|k| found(*k)) {
            intent.activity_focused = true;
            intent.keywords.push(keyword.clone());
        }
        intent
    }
}
