// Copyright 2025-present Amplifi
// SPDX-License-Identifier: Apache-2.0

//! The discovery engine: everything behind one facade.
//!
//! `DiscoveryEngine` wires the catalog, planner, history store, and
//! clock together and exposes the in-process API the UI layer consumes:
//! search, suggest, related, trending, and history management.
//!
//! The clock is injected so recency and trending behavior is
//! deterministic under test; production hosts use [`SystemClock`].
//!
//! For keystroke-driven callers, [`QueryTicket`] gives last-writer-wins
//! ordering: only the most recently issued ticket is current, so
//! results of a superseded query can be discarded on arrival no matter
//! when they complete.

use crate::catalog::Catalog;
use crate::history::{HistoryStore, MemoryHistoryStore};
use crate::scoring::{similarity, trending_score, RELATED_THRESHOLD, TRENDING_WINDOW_MS};
use crate::search::planner::QueryPlanner;
use crate::suggest::suggest;
use crate::types::{
    ContentItem, FilterConfig, ParsedQuery, ScoredResult, SearchRecord, Suggestion,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// A time source. Injected so tests can pin "now".
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> i64;
}

/// Wall-clock time in epoch milliseconds.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as i64)
            .unwrap_or(0)
    }
}

/// A generation stamp for one issued query. Compare with
/// [`DiscoveryEngine::is_current`] before applying results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryTicket(u64);

impl QueryTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// The content ranking and retrieval engine.
pub struct DiscoveryEngine {
    catalog: Catalog,
    planner: QueryPlanner,
    history: Box<dyn HistoryStore>,
    clock: Box<dyn Clock>,
    generation: AtomicU64,
}

impl Default for DiscoveryEngine {
    fn default() -> Self {
        DiscoveryEngine::new()
    }
}

impl DiscoveryEngine {
    /// An engine with the default strategies, in-memory history, and
    /// the system clock.
    pub fn new() -> Self {
        DiscoveryEngine::with_parts(
            Catalog::new(),
            QueryPlanner::with_default_strategies(),
            Box::new(MemoryHistoryStore::new()),
            Box::new(SystemClock),
        )
    }

    /// Full dependency injection, for hosts and tests.
    pub fn with_parts(
        catalog: Catalog,
        planner: QueryPlanner,
        history: Box<dyn HistoryStore>,
        clock: Box<dyn Clock>,
    ) -> Self {
        DiscoveryEngine {
            catalog,
            planner,
            history,
            clock,
            generation: AtomicU64::new(0),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    /// Execute a search and record it in history.
    ///
    /// An empty (or whitespace-only) query returns nothing and records
    /// nothing. A failing strategy degrades to fewer results; this
    /// method itself never fails.
    pub fn search(&self, query: &str, filters: &FilterConfig) -> Vec<ScoredResult> {
        self.search_for_user(query, filters, None)
    }

    /// `search`, attributing the history record to a user.
    pub fn search_for_user(
        &self,
        query: &str,
        filters: &FilterConfig,
        user_id: Option<String>,
    ) -> Vec<ScoredResult> {
        let Some(parsed) = ParsedQuery::parse(query) else {
            return Vec::new();
        };
        self.record_search(query.trim(), filters.clone(), user_id);
        self.planner
            .execute(&parsed, filters, &self.catalog, self.clock.now_ms())
    }

    // -------------------------------------------------------------------------
    // Suggestions
    // -------------------------------------------------------------------------

    /// Up to eight suggestions for a partially-typed query.
    pub fn suggest(&self, partial: &str) -> Vec<Suggestion> {
        suggest(partial, &self.history.list(), &self.catalog)
    }

    // -------------------------------------------------------------------------
    // Recommendations
    // -------------------------------------------------------------------------

    /// Items most similar to `item_id`, excluding the item itself and
    /// anything at or below the similarity threshold. An unknown id
    /// yields an empty list, not an error.
    pub fn related_to(&self, item_id: &str, limit: usize) -> Vec<ContentItem> {
        let Some(reference) = self.catalog.get_item(item_id) else {
            return Vec::new();
        };
        let mut related: Vec<(f64, ContentItem)> = self.catalog.scan(|candidate| {
            if candidate.id == reference.id {
                return None;
            }
            let score = similarity(&reference, candidate);
            (score > RELATED_THRESHOLD).then(|| (score, candidate.clone()))
        });
        related.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.1.id.cmp(&b.1.id))
        });
        related.truncate(limit);
        related.into_iter().map(|(_, item)| item).collect()
    }

    /// What's hot right now: items younger than 24 hours, ordered by
    /// time-decayed engagement. Older items are excluded outright, no
    /// matter their raw engagement.
    pub fn trending(&self, limit: usize) -> Vec<ContentItem> {
        let now_ms = self.clock.now_ms();
        let mut fresh: Vec<(f64, ContentItem)> = self.catalog.scan(|item| {
            let age = now_ms - item.created_at_ms;
            (age < TRENDING_WINDOW_MS).then(|| (trending_score(item, now_ms), item.clone()))
        });
        fresh.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.1.id.cmp(&b.1.id))
        });
        fresh.truncate(limit);
        fresh.into_iter().map(|(_, item)| item).collect()
    }

    // -------------------------------------------------------------------------
    // Catalog listings
    // -------------------------------------------------------------------------

    pub fn popular(&self, limit: usize) -> Vec<ContentItem> {
        self.catalog.popular(limit)
    }

    pub fn by_category(&self, category: &str, limit: usize, offset: usize) -> Vec<ContentItem> {
        self.catalog.by_category(category, limit, offset)
    }

    pub fn by_creator(&self, creator_id: &str, limit: usize) -> Vec<ContentItem> {
        self.catalog.by_creator(creator_id, limit)
    }

    // -------------------------------------------------------------------------
    // History
    // -------------------------------------------------------------------------

    /// Append a record; trimming past the cap happens atomically inside
    /// the store.
    pub fn record_search(&self, query: &str, filters: FilterConfig, user_id: Option<String>) {
        self.history.append(SearchRecord {
            query: query.to_string(),
            filters,
            timestamp_ms: self.clock.now_ms(),
            user_id,
        });
    }

    /// Retained history, most recent first.
    pub fn history(&self) -> Vec<SearchRecord> {
        self.history.list()
    }

    pub fn clear_history(&self) {
        self.history.clear();
    }

    // -------------------------------------------------------------------------
    // Query ordering
    // -------------------------------------------------------------------------

    /// Stamp a new query. Issuing a ticket supersedes all earlier ones.
    pub fn issue_ticket(&self) -> QueryTicket {
        QueryTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Is this ticket still the most recently issued one? Callers
    /// discard results whose ticket is stale, regardless of completion
    /// order.
    pub fn is_current(&self, ticket: QueryTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }
}
