// Copyright 2025-present Amplifi
// SPDX-License-Identifier: Apache-2.0

//! Content ranking and retrieval for the Amplifi creator platform.
//!
//! This crate is the discovery core behind the UI: an in-memory catalog
//! of content and creators, multi-strategy search with relevance
//! scoring, trending and related-content recommendations, typed
//! suggestions, and a capped search history.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐    ┌─────────────────┐    ┌───────────────┐
//! │ catalog  │───▶│ search::planner │───▶│ search::merge │
//! │ (items,  │    │ (strategy       │    │ (dedup by id, │
//! │ creators)│    │  fan-out)       │    │  stable sort) │
//! └──────────┘    └─────────────────┘    └───────────────┘
//!       │                  │                     │
//!       ▼                  ▼                     ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                      scoring                         │
//! │   (relevance, trending, similarity, ranking)         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! [`DiscoveryEngine`] ties these together with a [`HistoryStore`] and
//! a [`Clock`] and is the only type most hosts need.
//!
//! # Usage
//!
//! ```
//! use amplifi_discovery::{ContentItem, DiscoveryEngine, FilterConfig};
//!
//! let engine = DiscoveryEngine::new();
//! engine.catalog().upsert_item(ContentItem {
//!     id: "1".to_string(),
//!     title: "Advanced Gaming Tutorial".to_string(),
//!     tags: vec!["gaming".to_string(), "tutorial".to_string()],
//!     ..ContentItem::default()
//! });
//!
//! let results = engine.search("gaming tutorial", &FilterConfig::default());
//! assert_eq!(results[0].item.id, "1");
//! ```
//!
//! # Failure policy
//!
//! Nothing in this crate surfaces an error to the searching user. A
//! strategy failure, an unknown item id, an unrecognized filter value,
//! or unavailable history storage all degrade to "fewer or no results"
//! plus a logged warning.

// Module declarations
mod catalog;
mod engine;
mod history;
mod scoring;
mod search;
mod suggest;
mod types;

// Re-exports for public API
pub use catalog::Catalog;
pub use engine::{Clock, DiscoveryEngine, QueryTicket, SystemClock};
pub use history::{FileHistoryStore, HistoryError, HistoryStore, MemoryHistoryStore, HISTORY_CAP};
pub use scoring::{
    combined_boosts, creator_score, engagement_boost, engagement_score, popularity_boost,
    recency_boost, similarity, tag_score, title_score, trending_score, RELATED_THRESHOLD,
    TRENDING_WINDOW_MS,
};
pub use search::{
    CreatorStrategy, QueryPlanner, ResultMerger, SearchStrategy, StrategyError, TagStrategy,
    TitleStrategy, TranscriptStrategy,
};
pub use suggest::{suggest, MAX_SUGGESTIONS, MIN_QUERY_LEN, POPULAR_TERMS};
pub use types::{
    CategoryFilter, ContentItem, Creator, DateFilter, DurationFilter, FilterConfig, ParsedQuery,
    ScoredResult, SearchRecord, SortMode, StrategyHit, StrategyKind, Suggestion, SuggestionKind,
};
