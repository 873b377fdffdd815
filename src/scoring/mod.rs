// Copyright 2025-present Amplifi
// SPDX-License-Identifier: Apache-2.0

//! Scoring: how content gets its numbers.
//!
//! Three distinct measures live here and must not be conflated:
//!
//! - **Relevance** ties an item to a specific query (match strength plus
//!   recency/popularity/engagement boosts).
//! - **Trending** is query-independent, time-decayed engagement - the
//!   "what's hot right now" number.
//! - **Similarity** is item-to-item closeness, feeding related-content
//!   recommendations.
//!
//! Everything is a pure function over explicit inputs. No I/O, no shared
//! accumulators, no clock reads - callers pass `now_ms` in.

pub mod ranking;
mod relevance;
mod similarity;
mod trending;

pub use relevance::*;
pub use similarity::*;
pub use trending::*;
