//! Per-language keyword tables: synonyms, intent keywords, trending terms and
//! the labels shown on province/category suggestions.
//!
//! Tables are plain data read through Figment, either from the TOML embedded in
//! this crate or from a user file. They are built once and shared read-only.
use figment::{
    providers::{Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::error::{Error, Result};
use crate::types::Language;

const BUILTIN_LEXICON: &str = include_str!("../data/lexicon.toml");

/// A canonical concept and the terms that should pull it in (and vice versa).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymEntry {
    pub key: String,
    pub related: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageTables {
    #[serde(default)]
    pub synonyms: Vec<SynonymEntry>,
    #[serde(default)]
    pub location_words: Vec<String>,
    #[serde(default)]
    pub category_keywords: Vec<String>,
    #[serde(default)]
    pub activity_keywords: Vec<String>,
    #[serde(default)]
    pub trending: Vec<String>,
    #[serde(default)]
    pub province_label: String,
    #[serde(default)]
    pub category_label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    pub th: LanguageTables,
    pub en: LanguageTables,
}

impl Lexicon {
    pub fn builtin() -> Result<Self> {
        Self::extract(Figment::from(Toml::string(BUILTIN_LEXICON)), "builtin lexicon")
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::NotFound(format!("lexicon file {}", path.display())));
        }
        Self::extract(Figment::from(Toml::file(path)), &path.display().to_string())
    }

    fn extract(figment: Figment, origin: &str) -> Result<Self> {
        let lexicon: Lexicon = figment
            .extract()
            .map_err(|e| Error::InvalidConfig(format!("{}: {}", origin, e)))?;
        info!(
            origin,
            th_synonyms = lexicon.th.synonyms.len(),
            en_synonyms = lexicon.en.synonyms.len(),
            "lexicon loaded"
        );
        Ok(lexicon)
    }

    pub fn tables(&self, lang: Language) -> &LanguageTables {
        match lang {
            Language::Th => &self.th,
            Language::En => &self.en,
        }
    }
}
