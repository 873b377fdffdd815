// Copyright 2025-present Amplifi
// SPDX-License-Identifier: Apache-2.0

//! Result ordering: how merged results get sorted.
//!
//! Every mode sorts descending on one key and nothing else. Ties keep
//! encounter order - the sort is stable by contract, because callers
//! (and the determinism tests) depend on identical inputs producing
//! identical output order.

use crate::types::{ScoredResult, SortMode};
use std::cmp::Ordering;

/// Compare two results under a sort mode. Descending on the mode's key;
/// `Equal` on ties so a stable sort preserves encounter order.
pub fn compare_results(a: &ScoredResult, b: &ScoredResult, mode: SortMode) -> Ordering {
    match mode {
        SortMode::Relevance => b
            .final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(Ordering::Equal),
        SortMode::UploadDate => b.item.created_at_ms.cmp(&a.item.created_at_ms),
        SortMode::ViewCount => b.item.view_count.cmp(&a.item.view_count),
        SortMode::Rating => compare_ratings(a.item.rating, b.item.rating),
    }
}

/// Rated items sort before unrated ones; among rated, higher wins.
fn compare_ratings(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(ra), Some(rb)) => rb.partial_cmp(&ra).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable in-place sort under the given mode.
pub fn sort_results(results: &mut [ScoredResult], mode: SortMode) {
    results.sort_by(|a, b| compare_results(a, b, mode));
}
