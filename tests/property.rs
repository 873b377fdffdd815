//! Property-based tests using proptest.
//!
//! These verify the engine's invariants over randomly generated
//! catalogs and queries: score bounds, dedup, determinism, and the
//! history cap.

mod common;

#[path = "property/scoring_props.rs"]
mod scoring_props;

#[path = "property/search_props.rs"]
mod search_props;
