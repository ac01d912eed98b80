//! tripsearch-text
//!
//! Text normalization and tiered fuzzy scoring used by the ranking engine.
pub mod fuzzy;
pub mod normalize;
pub mod similarity;

pub use fuzzy::{classify, fuzzy_score, FuzzyMatcher, MatchTier};
pub use normalize::normalize;
