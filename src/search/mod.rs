// Copyright 2025-present Amplifi
// SPDX-License-Identifier: Apache-2.0

//! Search execution: where the rubber meets the road.
//!
//! A query fans out across independent retrieval strategies, each
//! producing raw hits against the catalog. Hits get boosted, filtered,
//! merged by id, and sorted. One failing strategy costs its own
//! contribution and nothing else.

pub mod merge;
pub mod planner;
pub mod strategy;

pub use merge::ResultMerger;
pub use planner::QueryPlanner;
pub use strategy::{
    CreatorStrategy, SearchStrategy, StrategyError, TagStrategy, TitleStrategy,
    TranscriptStrategy,
};
