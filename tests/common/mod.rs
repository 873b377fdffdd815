//! Shared test utilities and fixtures.

#![allow(dead_code)]

use amplifi_discovery::{
    Catalog, Clock, ContentItem, Creator, DiscoveryEngine, MemoryHistoryStore, QueryPlanner,
};

/// One hour in epoch milliseconds.
pub const HOUR_MS: i64 = 60 * 60 * 1000;
/// One day in epoch milliseconds.
pub const DAY_MS: i64 = 24 * HOUR_MS;
/// A fixed "now" far enough from the epoch that age math never goes
/// negative in fixtures.
pub const NOW_MS: i64 = 1_000 * DAY_MS;

/// A clock pinned to a fixed instant, so recency and trending behavior
/// is reproducible.
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}

/// An engine with default strategies, in-memory history, and a clock
/// pinned to [`NOW_MS`].
pub fn fixed_engine() -> DiscoveryEngine {
    engine_at(NOW_MS)
}

pub fn engine_at(now_ms: i64) -> DiscoveryEngine {
    DiscoveryEngine::with_parts(
        Catalog::new(),
        QueryPlanner::with_default_strategies(),
        Box::new(MemoryHistoryStore::new()),
        Box::new(FixedClock(now_ms)),
    )
}

/// A minimal item: everything zeroed except id and title.
pub fn item(id: &str, title: &str) -> ContentItem {
    ContentItem {
        id: id.to_string(),
        title: title.to_string(),
        ..ContentItem::default()
    }
}

/// The canonical fixture from the platform's search examples: a popular,
/// hour-old gaming tutorial.
pub fn gaming_tutorial() -> ContentItem {
    ContentItem {
        id: "1".to_string(),
        title: "Advanced Gaming Tutorial".to_string(),
        tags: vec!["gaming".to_string(), "tutorial".to_string()],
        view_count: 50_000,
        like_count: 2_500,
        created_at_ms: NOW_MS - HOUR_MS,
        ..ContentItem::default()
    }
}

pub fn creator(id: &str, display_name: &str) -> Creator {
    Creator {
        id: id.to_string(),
        display_name: display_name.to_string(),
        ..Creator::default()
    }
}

/// Ids of a result sequence, for order assertions.
pub fn result_ids(results: &[amplifi_discovery::ScoredResult]) -> Vec<String> {
    results.iter().map(|r| r.item.id.clone()).collect()
}
