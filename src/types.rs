// Copyright 2025-present Amplifi
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the discovery engine.
//!
//! These types define how content items, creators, filters, and search
//! results fit together. A few invariants the rest of the crate leans on:
//!
//! - **ContentItem**: `id` is unique within a catalog and non-empty. All
//!   count fields default to 0 when absent from serialized input.
//! - **Creator**: referenced by zero or more items via `creator_id`.
//!   Deleting a creator never cascades; orphaned references are filtered
//!   at query time, not at mutation time.
//! - **ScoredResult**: after merging, at most one result exists per
//!   distinct item id (enforced by `search::merge::ResultMerger`).
//! - **FilterConfig**: every field is a closed enum with an `Any`-style
//!   default. Unknown serialized values normalize to the default instead
//!   of failing deserialization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One piece of content in the catalog (video, short, stream VOD).
///
/// Counts are monotonically non-decreasing from this crate's point of
/// view; external collaborators mutate them via `Catalog::upsert_item`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Lowercase tags. Insertion order is irrelevant.
    pub tags: Vec<String>,
    pub category: String,
    /// Weak reference to a `Creator`. May be dangling.
    pub creator_id: String,
    pub duration_seconds: u32,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    pub share_count: u64,
    pub created_at_ms: i64,
    /// Average rating if the item has been rated at all.
    pub rating: Option<f64>,
}

impl Default for ContentItem {
    fn default() -> Self {
        ContentItem {
            id: String::new(),
            title: String::new(),
            description: String::new(),
            tags: Vec::new(),
            category: String::new(),
            creator_id: String::new(),
            duration_seconds: 0,
            view_count: 0,
            like_count: 0,
            comment_count: 0,
            share_count: 0,
            created_at_ms: 0,
            rating: None,
        }
    }
}

/// A channel owner. Looked up by `creator_id` during creator-name search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Creator {
    pub id: String,
    pub display_name: String,
    pub subscriber_count: u64,
    pub total_views: u64,
    pub joined_at_ms: i64,
}

impl Default for Creator {
    fn default() -> Self {
        Creator {
            id: String::new(),
            display_name: String::new(),
            subscriber_count: 0,
            total_views: 0,
            joined_at_ms: 0,
        }
    }
}

// =============================================================================
// FILTERS
// =============================================================================

/// Category filter: exact match or pass-through.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    Any,
    Is(String),
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        if value.is_empty() || value.eq_ignore_ascii_case("any") {
            CategoryFilter::Any
        } else {
            CategoryFilter::Is(value)
        }
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        match value {
            CategoryFilter::Any => "any".to_string(),
            CategoryFilter::Is(category) => category,
        }
    }
}

/// Duration buckets: `short` < 300s, `medium` 300-1199s, `long` >= 1200s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DurationFilter {
    #[default]
    Any,
    Short,
    Medium,
    Long,
}

/// Seconds below which an item counts as `short`.
pub const SHORT_MAX_SECONDS: u32 = 300;
/// Seconds at or above which an item counts as `long`.
pub const LONG_MIN_SECONDS: u32 = 1200;

impl From<String> for DurationFilter {
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "short" => DurationFilter::Short,
            "medium" => DurationFilter::Medium,
            "long" => DurationFilter::Long,
            // Unrecognized values degrade to a no-op filter.
            _ => DurationFilter::Any,
        }
    }
}

impl From<DurationFilter> for String {
    fn from(value: DurationFilter) -> Self {
        match value {
            DurationFilter::Any => "any",
            DurationFilter::Short => "short",
            DurationFilter::Medium => "medium",
            DurationFilter::Long => "long",
        }
        .to_string()
    }
}

impl DurationFilter {
    /// Does `duration_seconds` fall in this bucket?
    pub fn matches(self, duration_seconds: u32) -> bool {
        match self {
            DurationFilter::Any => true,
            DurationFilter::Short => duration_seconds < SHORT_MAX_SECONDS,
            DurationFilter::Medium => {
                duration_seconds >= SHORT_MAX_SECONDS && duration_seconds < LONG_MIN_SECONDS
            }
            DurationFilter::Long => duration_seconds >= LONG_MIN_SECONDS,
        }
    }
}

/// Recency buckets: `today` < 1d, `week` < 7d, `month` < 30d.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DateFilter {
    #[default]
    Any,
    Today,
    Week,
    Month,
}

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

impl From<String> for DateFilter {
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "today" => DateFilter::Today,
            "week" => DateFilter::Week,
            "month" => DateFilter::Month,
            _ => DateFilter::Any,
        }
    }
}

impl From<DateFilter> for String {
    fn from(value: DateFilter) -> Self {
        match value {
            DateFilter::Any => "any",
            DateFilter::Today => "today",
            DateFilter::Week => "week",
            DateFilter::Month => "month",
        }
        .to_string()
    }
}

impl DateFilter {
    /// Does an item created at `created_at_ms` pass, as seen at `now_ms`?
    pub fn matches(self, created_at_ms: i64, now_ms: i64) -> bool {
        let age = now_ms - created_at_ms;
        match self {
            DateFilter::Any => true,
            DateFilter::Today => age < DAY_MS,
            DateFilter::Week => age < 7 * DAY_MS,
            DateFilter::Month => age < 30 * DAY_MS,
        }
    }
}

/// Final ordering applied after merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortMode {
    #[default]
    Relevance,
    UploadDate,
    ViewCount,
    Rating,
}

impl From<String> for SortMode {
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "upload_date" => SortMode::UploadDate,
            "view_count" => SortMode::ViewCount,
            "rating" => SortMode::Rating,
            // "relevance" and anything unrecognized.
            _ => SortMode::Relevance,
        }
    }
}

impl From<SortMode> for String {
    fn from(value: SortMode) -> Self {
        match value {
            SortMode::Relevance => "relevance",
            SortMode::UploadDate => "upload_date",
            SortMode::ViewCount => "view_count",
            SortMode::Rating => "rating",
        }
        .to_string()
    }
}

/// Fixed-shape filter record. Absent fields deserialize to their `Any`
/// defaults, so `{}` is a valid, fully-permissive configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterConfig {
    pub category: CategoryFilter,
    pub duration: DurationFilter,
    pub date: DateFilter,
    pub sort_by: SortMode,
}

impl FilterConfig {
    /// All filters AND-combined. `sort_by` plays no part here.
    pub fn matches(&self, item: &ContentItem, now_ms: i64) -> bool {
        let category_ok = match &self.category {
            CategoryFilter::Any => true,
            CategoryFilter::Is(category) => item.category == *category,
        };
        category_ok
            && self.duration.matches(item.duration_seconds)
            && self.date.matches(item.created_at_ms, now_ms)
    }
}

// =============================================================================
// QUERY AND RESULTS
// =============================================================================

/// A free-text query, pre-tokenized once so every strategy sees the same
/// terms. Tokenization is lowercase + whitespace split, nothing more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    /// Trimmed, lowercased query text.
    pub text: String,
    /// Whitespace-split terms of `text`. Never empty.
    pub terms: Vec<String>,
}

impl ParsedQuery {
    /// Returns `None` when the query is empty after trimming, which is
    /// the signal to skip execution and history recording entirely.
    pub fn parse(raw: &str) -> Option<Self> {
        let text = raw.trim().to_lowercase();
        if text.is_empty() {
            return None;
        }
        let terms = text.split_whitespace().map(str::to_string).collect();
        Some(ParsedQuery { text, terms })
    }
}

/// Which retrieval strategy produced a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Title,
    Tag,
    Creator,
    Transcript,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrategyKind::Title => "title",
            StrategyKind::Tag => "tag",
            StrategyKind::Creator => "creator",
            StrategyKind::Transcript => "transcript",
        };
        f.write_str(name)
    }
}

/// A single strategy's raw hit, before boosts and merging.
#[derive(Debug, Clone)]
pub struct StrategyHit {
    pub item: ContentItem,
    /// Strategy-specific match score (title/tag/creator score).
    pub base_score: f64,
}

/// A merged, boosted search result. Transient: never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredResult {
    pub item: ContentItem,
    pub base_score: f64,
    pub final_score: f64,
    /// Every strategy that produced this item, in encounter order.
    pub matched_strategies: Vec<StrategyKind>,
}

impl ScoredResult {
    pub fn matched(&self, kind: StrategyKind) -> bool {
        self.matched_strategies.contains(&kind)
    }
}

// =============================================================================
// HISTORY AND SUGGESTIONS
// =============================================================================

/// One executed search, as kept in history (capped, most-recent-first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchRecord {
    pub query: String,
    pub filters: FilterConfig,
    pub timestamp_ms: i64,
    pub user_id: Option<String>,
}

impl Default for SearchRecord {
    fn default() -> Self {
        SearchRecord {
            query: String::new(),
            filters: FilterConfig::default(),
            timestamp_ms: 0,
            user_id: None,
        }
    }
}

/// Where a suggestion came from. Source order is the only ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Popular,
    Recent,
    Title,
}

/// An autocomplete candidate for a partially-typed query. Advisory only;
/// suggestions never feed back into the planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub text: String,
    pub kind: SuggestionKind,
}
