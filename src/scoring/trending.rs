// Copyright 2025-present Amplifi
// SPDX-License-Identifier: Apache-2.0

//! Trending: time-decayed engagement, independent of any query.
//!
//! Shares are worth ten views, comments five, likes three. The decay
//! halves nothing exactly - it is a plain exponential with a 24-hour
//! constant, so a day-old item keeps `1/e` of its raw engagement.

use crate::types::ContentItem;

/// Engagement weights, in ascending order of effort.
pub const VIEW_WEIGHT: f64 = 1.0;
pub const LIKE_WEIGHT: f64 = 3.0;
pub const COMMENT_WEIGHT: f64 = 5.0;
pub const SHARE_WEIGHT: f64 = 10.0;

/// Decay time constant, in hours.
pub const DECAY_HOURS: f64 = 24.0;

/// Only items younger than this appear in trending listings at all.
pub const TRENDING_WINDOW_MS: i64 = 24 * 60 * 60 * 1000;

/// Raw engagement: `views*1 + likes*3 + comments*5 + shares*10`.
pub fn engagement_score(item: &ContentItem) -> f64 {
    item.view_count as f64 * VIEW_WEIGHT
        + item.like_count as f64 * LIKE_WEIGHT
        + item.comment_count as f64 * COMMENT_WEIGHT
        + item.share_count as f64 * SHARE_WEIGHT
}

/// Engagement times `exp(-age_hours / 24)`.
pub fn trending_score(item: &ContentItem, now_ms: i64) -> f64 {
    let age_hours = (now_ms - item.created_at_ms) as f64 / (1000.0 * 60.0 * 60.0);
    engagement_score(item) * (-age_hours / DECAY_HOURS).exp()
}
