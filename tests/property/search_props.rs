//! End-to-end search properties over random catalogs.

use crate::common::{engine_at, FixedClock, NOW_MS};
use amplifi_discovery::{
    Catalog, ContentItem, DiscoveryEngine, FilterConfig, MemoryHistoryStore, QueryPlanner,
};
use proptest::prelude::*;
use std::collections::HashSet;

// ============================================================================
// STRATEGIES
// ============================================================================

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{2,6}").unwrap()
}

fn title_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 1..4).prop_map(|words| words.join(" "))
}

fn catalog_strategy() -> impl Strategy<Value = Vec<ContentItem>> {
    prop::collection::vec(
        (
            title_strategy(),
            prop::collection::vec(word_strategy(), 0..3),
            0u64..100_000,
            0i64..30,
        ),
        1..12,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(index, (title, tags, views, age_days))| ContentItem {
                id: format!("item-{}", index),
                title,
                tags,
                view_count: views,
                created_at_ms: NOW_MS - age_days * 24 * 60 * 60 * 1000,
                ..ContentItem::default()
            })
            .collect()
    })
}

fn populated_engine(items: &[ContentItem]) -> DiscoveryEngine {
    let engine = engine_at(NOW_MS);
    for item in items {
        engine.catalog().upsert_item(item.clone());
    }
    engine
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    /// Each id appears at most once in any result set.
    #[test]
    fn results_are_deduplicated(items in catalog_strategy(), query in word_strategy()) {
        let engine = populated_engine(&items);
        let results = engine.search(&query, &FilterConfig::default());

        let mut seen = HashSet::new();
        for result in &results {
            prop_assert!(seen.insert(result.item.id.clone()), "duplicate id {}", result.item.id);
        }
    }

    /// Identical calls produce identical orderings.
    #[test]
    fn repeated_search_is_deterministic(items in catalog_strategy(), query in word_strategy()) {
        let engine = populated_engine(&items);
        let first: Vec<String> = engine
            .search(&query, &FilterConfig::default())
            .into_iter()
            .map(|r| r.item.id)
            .collect();
        let second: Vec<String> = engine
            .search(&query, &FilterConfig::default())
            .into_iter()
            .map(|r| r.item.id)
            .collect();
        prop_assert_eq!(first, second);
    }

    /// Relevance order is non-increasing in final score.
    #[test]
    fn relevance_scores_are_non_increasing(items in catalog_strategy(), query in word_strategy()) {
        let engine = populated_engine(&items);
        let results = engine.search(&query, &FilterConfig::default());
        for window in results.windows(2) {
            prop_assert!(window[0].final_score >= window[1].final_score);
        }
    }

    /// History never exceeds the cap, whatever the query stream.
    #[test]
    fn history_never_exceeds_cap(queries in prop::collection::vec(word_strategy(), 0..80)) {
        let engine = DiscoveryEngine::with_parts(
            Catalog::new(),
            QueryPlanner::with_default_strategies(),
            Box::new(MemoryHistoryStore::new()),
            Box::new(FixedClock(NOW_MS)),
        );
        for query in &queries {
            engine.search(query, &FilterConfig::default());
        }
        prop_assert!(engine.history().len() <= amplifi_discovery::HISTORY_CAP);
        prop_assert_eq!(engine.history().len(), queries.len().min(amplifi_discovery::HISTORY_CAP));
    }

    /// Every result actually passed the active filters.
    #[test]
    fn filtered_results_respect_duration_bucket(items in catalog_strategy(), query in word_strategy()) {
        let engine = populated_engine(&items);
        let filters: FilterConfig = serde_json::from_str(r#"{"duration":"short"}"#).unwrap();
        for result in engine.search(&query, &filters) {
            prop_assert!(result.item.duration_seconds < 300);
        }
    }
}
