//! Wire shapes: what hosts serialize in and out.

use amplifi_discovery::{
    CategoryFilter, ContentItem, DateFilter, DurationFilter, FilterConfig, SearchRecord, SortMode,
};

#[test]
fn filter_config_round_trips_through_json() {
    let config = FilterConfig {
        category: CategoryFilter::Is("gaming".to_string()),
        duration: DurationFilter::Medium,
        date: DateFilter::Week,
        sort_by: SortMode::ViewCount,
    };
    let encoded = serde_json::to_string(&config).unwrap();
    let decoded: FilterConfig = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, config);
}

#[test]
fn filter_config_serializes_as_lowercase_strings() {
    let encoded = serde_json::to_value(FilterConfig::default()).unwrap();
    assert_eq!(encoded["category"], "any");
    assert_eq!(encoded["duration"], "any");
    assert_eq!(encoded["date"], "any");
    assert_eq!(encoded["sortBy"], "relevance");
}

#[test]
fn content_item_accepts_sparse_documents() {
    // Remote documents routinely omit counts and rating.
    let item: ContentItem = serde_json::from_str(
        r#"{
            "id": "v42",
            "title": "Lo-fi Study Mix",
            "tags": ["music", "lofi"],
            "creatorId": "c7",
            "createdAtMs": 1700000000000
        }"#,
    )
    .unwrap();
    assert_eq!(item.creator_id, "c7");
    assert_eq!(item.view_count, 0);
    assert_eq!(item.duration_seconds, 0);
    assert!(item.rating.is_none());
}

#[test]
fn search_record_history_array_round_trips() {
    let records = vec![
        SearchRecord {
            query: "gaming".to_string(),
            filters: FilterConfig::default(),
            timestamp_ms: 2,
            user_id: Some("u1".to_string()),
        },
        SearchRecord {
            query: "music".to_string(),
            filters: FilterConfig::default(),
            timestamp_ms: 1,
            user_id: None,
        },
    ];
    let encoded = serde_json::to_string(&records).unwrap();
    let decoded: Vec<SearchRecord> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, records);
}
