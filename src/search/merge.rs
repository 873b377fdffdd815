// Copyright 2025-present Amplifi
// SPDX-License-Identifier: Apache-2.0

//! Cross-strategy result merging.
//!
//! An item should appear at most once in search results. Sounds obvious,
//! but it is easy to get wrong when several strategies produce the same
//! item. `ResultMerger` is the single place where deduplication happens,
//! keyed by item id and nothing else.
//!
//! When strategies collide on an id, the **maximum** final score wins -
//! scores are never summed across strategies, so an item can't climb the
//! ranking just by grazing many weak strategies. The contributing
//! strategy set accumulates either way.
//!
//! **Invariant**: each id appears at most once in merged output, and
//! first-encounter order is preserved for stable tie-breaking.

use crate::scoring::ranking::sort_results;
use crate::types::{ScoredResult, SortMode, StrategyKind};
use std::collections::HashMap;

/// Accumulates per-strategy results into one deduplicated set.
#[derive(Default)]
pub struct ResultMerger {
    /// Best result seen per item id.
    map: HashMap<String, ScoredResult>,
    /// Item ids in first-encounter order, for stable output.
    order: Vec<String>,
}

impl ResultMerger {
    pub fn new() -> Self {
        ResultMerger::default()
    }

    /// Merge one strategy's scored result for an item.
    ///
    /// First sighting inserts; later sightings keep the higher final
    /// score and add the strategy to the contributor set.
    pub fn merge(&mut self, kind: StrategyKind, result: ScoredResult) {
        match self.map.get_mut(&result.item.id) {
            Some(existing) => {
                if result.final_score > existing.final_score {
                    existing.final_score = result.final_score;
                    existing.base_score = result.base_score;
                }
                if !existing.matched_strategies.contains(&kind) {
                    existing.matched_strategies.push(kind);
                }
            }
            None => {
                let id = result.item.id.clone();
                let mut entry = result;
                entry.matched_strategies = vec![kind];
                self.map.insert(id.clone(), entry);
                self.order.push(id);
            }
        }
    }

    pub fn merge_all(
        &mut self,
        kind: StrategyKind,
        results: impl IntoIterator<Item = ScoredResult>,
    ) {
        for result in results {
            self.merge(kind, result);
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Deduplicated results in first-encounter order, then stably
    /// sorted under `mode` so ties keep that encounter order.
    pub fn into_sorted(mut self, mode: SortMode) -> Vec<ScoredResult> {
        let mut results: Vec<ScoredResult> = self
            .order
            .iter()
            .filter_map(|id| self.map.remove(id))
            .collect();
        sort_results(&mut results, mode);
        results
    }
}
