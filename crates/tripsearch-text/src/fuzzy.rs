//! Tiered fuzzy matching between a query and a single target string.
//!
//! Tiers are tried in order and the first that applies decides the score:
//!
//! | tier | condition | score |
//! |---|---|---|
//! | exact | normalized strings equal | 1.0 |
//! | substring | query contained in target | 0.8 |
//! | token overlap | share of query words matching a target word > 0.5 | 0.6 × share |
//! | sequence | gestalt ratio > 0.5 | 0.4 × ratio |
//!
//! Anything else scores 0.
use tripsearch_core::traits::Scorer;

use crate::normalize::normalize;
use crate::similarity::sequence_ratio;

pub const EXACT_SCORE: f64 = 1.0;
pub const SUBSTRING_SCORE: f64 = 0.8;
pub const TOKEN_WEIGHT: f64 = 0.6;
pub const SEQUENCE_WEIGHT: f64 = 0.4;
const MIN_RATIO: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Exact,
    Substring,
    TokenOverlap,
    Sequence,
    NoMatch,
}

/// Share of query words that overlap some target word. A query word matches
/// when it contains, or is contained in, a target word; each query word counts
/// at most once.
pub fn token_overlap(query: &str, target: &str) -> f64 {
    let query_words: Vec<&str> = query.split_whitespace().collect();
    if query_words.is_empty() {
        return 0.0;
    }
    let target_words: Vec<&str> = target.split_whitespace().collect();
    let matched = query_words
        .iter()
        .filter(|qw| target_words.iter().any(|tw| tw.contains(*qw) || qw.contains(tw)))
        .count();
    matched as f64 / query_words.len() as f64
}

/// Tier and score for already-normalized inputs.
fn classify_normalized(query: &str, target: &str) -> (MatchTier, f64) {
    if query == target {
        return (MatchTier::Exact, EXACT_SCORE);
    }
    if !query.is_empty() && target.contains(query) {
        return (MatchTier::Substring, SUBSTRING_SCORE);
    }
    let overlap = token_overlap(query, target);
    if overlap > MIN_RATIO {
        return (MatchTier::TokenOverlap, TOKEN_WEIGHT * overlap);
    }
    let ratio = sequence_ratio(query, target);
    if ratio > MIN_RATIO {
        return (MatchTier::Sequence, SEQUENCE_WEIGHT * ratio);
    }
    (MatchTier::NoMatch, 0.0)
}

/// Which tier decides `query` against `target`, and the resulting score.
pub fn classify(query: &str, target: &str) -> (MatchTier, f64) {
    classify_normalized(&normalize(query), &normalize(target))
}

/// Fuzzy score in `[0, 1]`.
pub fn fuzzy_score(query: &str, target: &str) -> f64 {
    classify(query, target).1
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyMatcher;

impl Scorer for FuzzyMatcher {
    fn score(&self, query: &str, target: &str) -> f64 {
        fuzzy_score(query, target)
    }
}
