// Copyright 2025-present Amplifi
// SPDX-License-Identifier: Apache-2.0

//! The suggestion engine: narrowing candidates as a query is typed.
//!
//! Three sources feed in, in fixed priority order: curated popular
//! terms, the caller's recent searches, and catalog titles. There is no
//! scoring - source order is the ranking, exact-string dedup runs over
//! the combined list, and the first eight unique strings survive.
//!
//! Suggestions are advisory. Nothing here feeds back into the planner.

use crate::catalog::Catalog;
use crate::types::{SearchRecord, Suggestion, SuggestionKind};

/// Curated terms shown while the user is still typing.
pub const POPULAR_TERMS: [&str; 10] = [
    "gaming",
    "tutorial",
    "music",
    "comedy",
    "news",
    "technology",
    "cooking",
    "fitness",
    "travel",
    "education",
];

/// Minimum typed length before suggestions activate.
pub const MIN_QUERY_LEN: usize = 2;
/// At most this many suggestions are returned.
pub const MAX_SUGGESTIONS: usize = 8;
/// Cap on history-sourced suggestions.
pub const MAX_RECENT: usize = 3;
/// Cap on title-sourced suggestions.
pub const MAX_TITLES: usize = 5;

/// Ranked suggestions for a partially-typed query.
///
/// `history` is expected most-recent-first, as `HistoryStore::list`
/// returns it.
pub fn suggest(partial: &str, history: &[SearchRecord], catalog: &Catalog) -> Vec<Suggestion> {
    let typed = partial.trim().to_lowercase();
    if typed.len() < MIN_QUERY_LEN {
        return Vec::new();
    }

    let mut suggestions: Vec<Suggestion> = Vec::new();

    // Popular terms: case-insensitive substring, not prefix-only.
    for term in POPULAR_TERMS {
        if term.contains(typed.as_str()) {
            suggestions.push(Suggestion {
                text: term.to_string(),
                kind: SuggestionKind::Popular,
            });
        }
    }

    // Recent searches containing the typed text, newest first.
    suggestions.extend(
        history
            .iter()
            .filter(|record| record.query.to_lowercase().contains(typed.as_str()))
            .take(MAX_RECENT)
            .map(|record| Suggestion {
                text: record.query.clone(),
                kind: SuggestionKind::Recent,
            }),
    );

    // Catalog titles by prefix.
    let mut titles = catalog.scan(|item| {
        item.title
            .to_lowercase()
            .starts_with(typed.as_str())
            .then(|| item.title.clone())
    });
    // Catalog scan order is unspecified; pin it down for determinism.
    titles.sort();
    suggestions.extend(titles.into_iter().take(MAX_TITLES).map(|text| Suggestion {
        text,
        kind: SuggestionKind::Title,
    }));

    dedup_by_text(suggestions)
}

/// Exact-string dedup keeping first occurrence, truncated to the cap.
fn dedup_by_text(suggestions: Vec<Suggestion>) -> Vec<Suggestion> {
    let mut seen: Vec<String> = Vec::new();
    let mut unique = Vec::new();
    for suggestion in suggestions {
        if seen.contains(&suggestion.text) {
            continue;
        }
        seen.push(suggestion.text.clone());
        unique.push(suggestion);
        if unique.len() == MAX_SUGGESTIONS {
            break;
        }
    }
    unique
}
