//! Catalog listing queries: popular, by-category, by-creator.

use crate::common::{fixed_engine, item, NOW_MS};

#[test]
fn popular_orders_by_view_count() {
    let engine = fixed_engine();
    for (id, views) in [("a", 10u64), ("b", 500), ("c", 90)] {
        let mut entry = item(id, id);
        entry.view_count = views;
        engine.catalog().upsert_item(entry);
    }

    let ids: Vec<String> = engine.popular(2).iter().map(|i| i.id.clone()).collect();
    assert_eq!(ids, vec!["b", "c"]);
}

#[test]
fn by_category_pages_through_results() {
    let engine = fixed_engine();
    for (id, views) in [("a", 40u64), ("b", 30), ("c", 20), ("d", 10)] {
        let mut entry = item(id, id);
        entry.category = "music".to_string();
        entry.view_count = views;
        engine.catalog().upsert_item(entry);
    }
    let mut other = item("x", "x");
    other.category = "gaming".to_string();
    other.view_count = 999;
    engine.catalog().upsert_item(other);

    let first_page: Vec<String> = engine
        .by_category("music", 2, 0)
        .iter()
        .map(|i| i.id.clone())
        .collect();
    let second_page: Vec<String> = engine
        .by_category("music", 2, 2)
        .iter()
        .map(|i| i.id.clone())
        .collect();
    assert_eq!(first_page, vec!["a", "b"]);
    assert_eq!(second_page, vec!["c", "d"]);
}

#[test]
fn by_creator_returns_newest_first() {
    let engine = fixed_engine();
    for (id, age_days) in [("a", 5i64), ("b", 1), ("c", 3)] {
        let mut entry = item(id, id);
        entry.creator_id = "c1".to_string();
        entry.created_at_ms = NOW_MS - age_days * 24 * 60 * 60 * 1000;
        engine.catalog().upsert_item(entry);
    }

    let ids: Vec<String> = engine
        .by_creator("c1", 10)
        .iter()
        .map(|i| i.id.clone())
        .collect();
    assert_eq!(ids, vec!["b", "c", "a"]);
}
