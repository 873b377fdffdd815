// Copyright 2025-present Amplifi
// SPDX-License-Identifier: Apache-2.0

//! The query planner: strategy fan-out, boosts, filters, merge.
//!
//! Pipeline for one query:
//!
//! ```text
//! strategies ──execute──▶ raw hits ──boost──▶ scored ──filter──▶ merge ──sort──▶ results
//! ```
//!
//! Failure isolation is the planner's one hard rule: a strategy that
//! errors (or panics) contributes nothing, gets a warning in the log,
//! and the remaining strategies proceed untouched.

use crate::catalog::Catalog;
use crate::scoring::combined_boosts;
use crate::search::merge::ResultMerger;
use crate::search::strategy::{
    CreatorStrategy, SearchStrategy, TagStrategy, TitleStrategy, TranscriptStrategy,
};
use crate::types::{FilterConfig, ParsedQuery, ScoredResult, StrategyHit};
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Runs every registered strategy and merges their contributions.
pub struct QueryPlanner {
    strategies: Vec<Box<dyn SearchStrategy>>,
}

impl Default for QueryPlanner {
    fn default() -> Self {
        QueryPlanner::with_default_strategies()
    }
}

impl QueryPlanner {
    /// The standard four: title/description, tags, creator name, and
    /// the transcript stub.
    pub fn with_default_strategies() -> Self {
        QueryPlanner {
            strategies: vec![
                Box::new(TitleStrategy),
                Box::new(TagStrategy),
                Box::new(CreatorStrategy),
                Box::new(TranscriptStrategy),
            ],
        }
    }

    /// A planner over caller-supplied strategies. Used by hosts that
    /// add retrieval methods, and by tests injecting failing ones.
    pub fn with_strategies(strategies: Vec<Box<dyn SearchStrategy>>) -> Self {
        QueryPlanner { strategies }
    }

    /// Execute the full pipeline for an already-parsed query.
    ///
    /// Filters apply after strategy execution and before the merge, so
    /// a filtered-out item cannot re-enter via another strategy's hit.
    pub fn execute(
        &self,
        query: &ParsedQuery,
        filters: &FilterConfig,
        catalog: &Catalog,
        now_ms: i64,
    ) -> Vec<ScoredResult> {
        let mut merger = ResultMerger::new();

        for strategy in &self.strategies {
            let kind = strategy.kind();
            let hits = match catch_unwind(AssertUnwindSafe(|| strategy.execute(query, catalog))) {
                Ok(Ok(hits)) => hits,
                Ok(Err(error)) => {
                    log::warn!("search degraded: {}", error);
                    continue;
                }
                Err(_) => {
                    log::warn!("search degraded: {} strategy panicked", kind);
                    continue;
                }
            };

            let scored = hits
                .into_iter()
                .filter(|hit| filters.matches(&hit.item, now_ms))
                .map(|hit| score_hit(hit, now_ms));
            merger.merge_all(kind, scored);
        }

        merger.into_sorted(filters.sort_by)
    }
}

/// Lift a raw hit into a scored result: base plus recency, popularity,
/// and engagement boosts. Applied exactly once per (strategy, item).
fn score_hit(hit: StrategyHit, now_ms: i64) -> ScoredResult {
    let boosts = combined_boosts(&hit.item, now_ms);
    ScoredResult {
        final_score: hit.base_score + boosts,
        base_score: hit.base_score,
        item: hit.item,
        matched_strategies: Vec::new(),
    }
}
