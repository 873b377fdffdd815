//! Suggestion ordering across the three sources.

use crate::common::{fixed_engine, item};
use amplifi_discovery::{FilterConfig, SuggestionKind, MAX_SUGGESTIONS};

#[test]
fn sources_appear_in_priority_order() {
    let engine = fixed_engine();
    engine.catalog().upsert_item(item("1", "gaming chair review"));
    engine.search("gaming laptops", &FilterConfig::default());

    let suggestions = engine.suggest("gaming");
    let kinds: Vec<SuggestionKind> = suggestions.iter().map(|s| s.kind).collect();

    // Popular first, then recent, then titles.
    let first_popular = kinds.iter().position(|k| *k == SuggestionKind::Popular);
    let first_recent = kinds.iter().position(|k| *k == SuggestionKind::Recent);
    let first_title = kinds.iter().position(|k| *k == SuggestionKind::Title);
    assert!(first_popular < first_recent);
    assert!(first_recent < first_title);
}

#[test]
fn cap_of_eight_holds_under_many_sources() {
    let engine = fixed_engine();
    for index in 0..20 {
        engine
            .catalog()
            .upsert_item(item(&format!("{}", index), &format!("gaming video {}", index)));
        engine.search(&format!("gaming query {}", index), &FilterConfig::default());
    }

    assert!(engine.suggest("gaming").len() <= MAX_SUGGESTIONS);
}

#[test]
fn suggestions_never_mutate_history() {
    let engine = fixed_engine();
    engine.search("gaming", &FilterConfig::default());
    let before = engine.history();

    engine.suggest("gaming");

    assert_eq!(engine.history(), before);
}
