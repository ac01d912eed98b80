use proptest::prelude::*;
use tripsearch_text::{classify, fuzzy_score, normalize, MatchTier};

// Latin, Latin-1 accents, Thai and assorted whitespace.
const TEXT: &str = "[a-zA-Z0-9 À-ÿก-๛\t\n]{0,24}";

proptest! {
    #[test]
    fn normalize_is_idempotent(s in TEXT) {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn score_is_bounded(q in TEXT, t in TEXT) {
        let score = fuzzy_score(&q, &t);
        prop_assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
    }

    #[test]
    fn non_empty_string_matches_itself(s in "[a-zA-Zก-ฮ]{1,16}") {
        prop_assert_eq!(fuzzy_score(&s, &s), 1.0);
    }

    #[test]
    fn tier_scores_stay_in_their_band(q in TEXT, t in TEXT) {
        let (tier, score) = classify(&q, &t);
        match tier {
            MatchTier::Exact => prop_assert_eq!(score, 1.0),
            MatchTier::Substring => prop_assert_eq!(score, 0.8),
            MatchTier::TokenOverlap => prop_assert!(score > 0.3 && score <= 0.6),
            MatchTier::Sequence => prop_assert!(score > 0.2 && score <= 0.4),
            MatchTier::NoMatch => prop_assert_eq!(score, 0.0),
        }
    }
}

#[test]
fn substring_beats_token_overlap() {
    assert_eq!(classify("phi phi", "Phi Phi Islands").0, MatchTier::Substring);
    assert_eq!(classify("islands phi phi", "Phi Phi Islands").0, MatchTier::TokenOverlap);
}
