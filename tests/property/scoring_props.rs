//! Scoring invariant properties.
//!
//! - Similarity is bounded in [0, 1], reflexive, and symmetric.
//! - Title score never decreases when a matching term is appended, and
//!   strictly increases for a whole-title match.
//! - Boosts are non-negative, so a base score is a lower bound on the
//!   final score.

use amplifi_discovery::{
    engagement_boost, popularity_boost, similarity, title_score, ContentItem,
};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{2,8}").unwrap()
}

fn tags_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 0..5)
}

fn item_strategy() -> impl Strategy<Value = ContentItem> {
    (
        "[a-z0-9]{1,8}",
        word_strategy(),
        tags_strategy(),
        word_strategy(),
        word_strategy(),
        0u32..20_000,
        0u64..1_000_000,
    )
        .prop_map(
            |(id, category, tags, creator_id, title, duration, views)| ContentItem {
                id,
                title,
                category,
                tags,
                creator_id,
                duration_seconds: duration,
                view_count: views,
                ..ContentItem::default()
            },
        )
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn similarity_is_bounded(a in item_strategy(), b in item_strategy()) {
        let score = similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score), "similarity {} out of bounds", score);
    }

    #[test]
    fn similarity_is_reflexive(a in item_strategy()) {
        let score = similarity(&a, &a);
        prop_assert!((score - 1.0).abs() < 1e-9, "similarity(a, a) = {}", score);
    }

    #[test]
    fn similarity_is_symmetric(a in item_strategy(), b in item_strategy()) {
        prop_assert_eq!(similarity(&a, &b), similarity(&b, &a));
    }

    /// Appending a term equal to the whole title strictly increases the
    /// title score.
    #[test]
    fn whole_title_term_strictly_increases_score(
        title in word_strategy(),
        others in prop::collection::vec(word_strategy(), 0..4),
    ) {
        let title_lower = title.to_lowercase();
        let without = title_score(&title_lower, &others);
        let mut with_term = others;
        with_term.push(title_lower.clone());
        let with = title_score(&title_lower, &with_term);
        prop_assert!(with > without, "{} !> {}", with, without);
    }

    /// More terms never lower the title score.
    #[test]
    fn title_score_is_monotone_in_terms(
        title in word_strategy(),
        terms in prop::collection::vec(word_strategy(), 0..5),
        extra in word_strategy(),
    ) {
        let base = title_score(&title, &terms);
        let mut extended = terms;
        extended.push(extra);
        prop_assert!(title_score(&title, &extended) >= base);
    }

    #[test]
    fn boosts_are_never_negative(views in 0u64..10_000_000, likes in 0u64..10_000_000) {
        prop_assert!(popularity_boost(views) >= 0.0);
        prop_assert!(engagement_boost(likes, views) >= 0.0);
    }
}
