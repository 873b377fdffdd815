// Copyright 2025-present Amplifi
// SPDX-License-Identifier: Apache-2.0

//! Query-relevance scoring: match strength plus engagement boosts.
//!
//! The constants below determine ranking order, so behavioral parity
//! depends on their exact values. They are deliberately `pub` - hosts
//! may read them for display or tuning experiments - but they are not
//! runtime configuration.
//!
//! A worked example: query "gaming" against title "Gaming Tutorial"
//! scores 10 (contained) + 20 (title starts with term) = 30. Against
//! title "gaming" it scores 10 + 50 (whole-title match) + 20 = 80.

use crate::types::ContentItem;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Per query term contained anywhere in the title.
pub const TITLE_TERM_SCORE: f64 = 10.0;
/// Additional bonus when a term equals the entire title.
pub const TITLE_EXACT_BONUS: f64 = 50.0;
/// Additional bonus when the title starts with a term.
pub const TITLE_PREFIX_BONUS: f64 = 20.0;

/// Per (tag, term) pair where the tag contains the term.
pub const TAG_SUBSTRING_SCORE: f64 = 5.0;
/// Additional bonus when tag and term are equal, so an exact pair
/// contributes 20 in total.
pub const TAG_EXACT_BONUS: f64 = 15.0;

/// Creator-name tiers. Only the single best tier applies.
pub const CREATOR_EXACT_SCORE: f64 = 100.0;
pub const CREATOR_PREFIX_SCORE: f64 = 80.0;
pub const CREATOR_SUBSTRING_SCORE: f64 = 60.0;

/// Flat boost for items younger than seven days.
pub const RECENCY_WEEK_BOOST: f64 = 10.0;
/// Flat boost for items younger than thirty days.
pub const RECENCY_MONTH_BOOST: f64 = 5.0;

/// Popularity boost weight: `log10(views + 1) * POPULARITY_WEIGHT`.
pub const POPULARITY_WEIGHT: f64 = 2.0;
/// Engagement boost weight: `(likes / views) * ENGAGEMENT_WEIGHT`.
pub const ENGAGEMENT_WEIGHT: f64 = 100.0;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Title match strength for a set of query terms.
///
/// Terms and title are expected pre-lowercased (`ParsedQuery` handles
/// the terms; callers lowercase the title once). Contributions are
/// summed over all terms - appending a matching term can only raise
/// the score.
pub fn title_score(title_lower: &str, terms: &[String]) -> f64 {
    let mut score = 0.0;
    for term in terms {
        if title_lower.contains(term.as_str()) {
            score += TITLE_TERM_SCORE;
            if title_lower == term.as_str() {
                score += TITLE_EXACT_BONUS;
            }
            if title_lower.starts_with(term.as_str()) {
                score += TITLE_PREFIX_BONUS;
            }
        }
    }
    score
}

/// Tag match strength: additive over all (tag, term) pairs.
pub fn tag_score(tags: &[String], terms: &[String]) -> f64 {
    let mut score = 0.0;
    for tag in tags {
        for term in terms {
            if tag.contains(term.as_str()) {
                score += TAG_SUBSTRING_SCORE;
                if tag == term {
                    score += TAG_EXACT_BONUS;
                }
            }
        }
    }
    score
}

/// Creator-name match, tiered: exact > prefix > substring > none.
///
/// Unlike title/tag scoring this is not additive - the highest matching
/// tier alone applies. The query here is the full query text, not the
/// term list.
pub fn creator_score(display_name: &str, query_lower: &str) -> f64 {
    let name_lower = display_name.to_lowercase();
    if name_lower == query_lower {
        CREATOR_EXACT_SCORE
    } else if name_lower.starts_with(query_lower) {
        CREATOR_PREFIX_SCORE
    } else if name_lower.contains(query_lower) {
        CREATOR_SUBSTRING_SCORE
    } else {
        0.0
    }
}

/// Flat recency boost: +10 under 7 days old, +5 under 30 days.
pub fn recency_boost(created_at_ms: i64, now_ms: i64) -> f64 {
    let age_ms = now_ms - created_at_ms;
    if age_ms < 7 * DAY_MS {
        RECENCY_WEEK_BOOST
    } else if age_ms < 30 * DAY_MS {
        RECENCY_MONTH_BOOST
    } else {
        0.0
    }
}

/// Logarithmic popularity boost, so view counts help without dominating.
pub fn popularity_boost(view_count: u64) -> f64 {
    ((view_count as f64) + 1.0).log10() * POPULARITY_WEIGHT
}

/// Like-rate boost. Zero views means zero boost, not a division by zero.
pub fn engagement_boost(like_count: u64, view_count: u64) -> f64 {
    if view_count > 0 {
        (like_count as f64 / view_count as f64) * ENGAGEMENT_WEIGHT
    } else {
        0.0
    }
}

/// All three boosts combined, applied once per item on top of whatever
/// base score the strategy produced.
pub fn combined_boosts(item: &ContentItem, now_ms: i64) -> f64 {
    recency_boost(item.created_at_ms, now_ms)
        + popularity_boost(item.view_count)
        + engagement_boost(item.like_count, item.view_count)
}
