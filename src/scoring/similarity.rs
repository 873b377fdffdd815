// Copyright 2025-present Amplifi
// SPDX-License-Identifier: Apache-2.0

//! Item-to-item similarity for related-content recommendations.
//!
//! A weighted sum clamped to [0, 1]:
//!
//! | Component          | Weight | Signal                                   |
//! |--------------------|--------|------------------------------------------|
//! | Category           | 0.4    | exact equality                           |
//! | Tag overlap        | 0.3    | `|intersection| / max(|a|, |b|)`         |
//! | Creator            | 0.2    | same `creator_id`                        |
//! | Duration closeness | 0.1    | `1 - |d1 - d2| / max(d1, d2)`            |
//!
//! `similarity(a, a)` is 1 for any item: both ratio components treat
//! the degenerate all-empty / all-zero case as a perfect match rather
//! than 0/0.

use crate::types::ContentItem;

pub const CATEGORY_WEIGHT: f64 = 0.4;
pub const TAG_WEIGHT: f64 = 0.3;
pub const CREATOR_WEIGHT: f64 = 0.2;
pub const DURATION_WEIGHT: f64 = 0.1;

/// Items at or below this similarity are excluded from related results.
pub const RELATED_THRESHOLD: f64 = 0.3;

/// Share of tags in common, sized against the larger tag set.
fn tag_overlap_ratio(a: &[String], b: &[String]) -> f64 {
    let larger = a.len().max(b.len());
    if larger == 0 {
        // Two untagged items are indistinguishable on this axis.
        return 1.0;
    }
    let common = a.iter().filter(|tag| b.contains(tag)).count();
    common as f64 / larger as f64
}

/// How close two durations are, as a fraction of the longer one.
fn duration_closeness(d1: u32, d2: u32) -> f64 {
    let longer = d1.max(d2);
    if longer == 0 {
        return 1.0;
    }
    1.0 - (d1.abs_diff(d2) as f64 / longer as f64)
}

/// Weighted similarity in [0, 1].
pub fn similarity(a: &ContentItem, b: &ContentItem) -> f64 {
    let mut score = 0.0;
    if a.category == b.category {
        score += CATEGORY_WEIGHT;
    }
    score += tag_overlap_ratio(&a.tags, &b.tags) * TAG_WEIGHT;
    if a.creator_id == b.creator_id {
        score += CREATOR_WEIGHT;
    }
    score += duration_closeness(a.duration_seconds, b.duration_seconds) * DURATION_WEIGHT;
    score.min(1.0)
}
