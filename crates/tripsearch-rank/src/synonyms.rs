//! Query expansion through the per-language synonym tables.
use std::collections::HashSet;

use tripsearch_core::types::Language;
use tripsearch_core::Lexicon;

pub struct SynonymExpander<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> SynonymExpander<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// The verbatim query plus every term linked to it through a synonym entry.
    ///
    /// A key found in the lowercased query pulls in all of its related terms;
    /// a related term found in the query pulls in its key. Duplicates are
    /// dropped, first occurrence wins.
    pub fn expand(&self, query: &str, lang: Language) -> Vec<String> {
        let lowered = query.to_lowercase();
        let mut terms = vec![query.to_string()];
        for entry in &self.lexicon.tables(lang).synonyms {
            if lowered.contains(entry.key.as_str()) {
                terms.extend(entry.related.iter().cloned());
            }
            for related in &entry.related {
                if lowered.contains(related.as_str()) {
                    terms.push(entry.key.clone());
                }
            }
        }
        let mut seen = HashSet::new();
        terms.retain(|t| seen.insert(t.clone()));
        terms
    }
}
