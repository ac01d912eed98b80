//! The fixed set of places, provinces and categories that searches scan.
//!
//! The catalog is trusted input: nothing here checks that every place carries
//! both `th` and `en` descriptions. A gap only surfaces when a search asks for
//! the missing language.
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{Error, Result};
use crate::types::{CategoryRecord, PlaceRecord, ProvinceRecord};

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub places: Vec<PlaceRecord>,
    #[serde(default)]
    pub provinces: Vec<ProvinceRecord>,
    #[serde(default)]
    pub categories: Vec<CategoryRecord>,
}

impl Catalog {
    pub fn new(places: Vec<PlaceRecord>, provinces: Vec<ProvinceRecord>, categories: Vec<CategoryRecord>) -> Self {
        Self { places, provinces, categories }
    }

    /// The dataset shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        info!(
            places = catalog.places.len(),
            provinces = catalog.provinces.len(),
            categories = catalog.categories.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::NotFound(format!("catalog file {}", path.display())));
        }
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn place(&self, id: &str) -> Option<&PlaceRecord> {
        self.places.iter().find(|p| p.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty() && self.provinces.is_empty() && self.categories.is_empty()
    }
}
