//! tripsearch-rank
//!
//! Query expansion, intent detection and the ranking engine that turns a
//! `SearchQuery` into ranked results and suggestions over a `Catalog`.
pub mod engine;
pub mod filters;
pub mod intent;
pub mod suggest;
pub mod synonyms;

pub use engine::RankingEngine;
pub use intent::IntentAnalyzer;
pub use synonyms::SynonymExpander;
