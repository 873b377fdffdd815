// Copyright 2025-present Amplifi
// SPDX-License-Identifier: Apache-2.0

//! The in-memory working set of content and creator records.
//!
//! Not a durable store: population happens out-of-band (the host fetches
//! from its remote document store and upserts here), and the only failure
//! mode is "not found". Reads and writes can interleave on multi-threaded
//! hosts, so each map sits behind its own `RwLock` - readers concurrent,
//! writer exclusive.

use crate::types::{ContentItem, Creator};
use parking_lot::RwLock;
use std::collections::HashMap;

/// Catalog of content items and creator profiles, keyed by id.
#[derive(Default)]
pub struct Catalog {
    items: RwLock<HashMap<String, ContentItem>>,
    creators: RwLock<HashMap<String, Creator>>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Insert or replace an item by id. Items with an empty id are
    /// dropped; that is the only validation performed.
    pub fn upsert_item(&self, item: ContentItem) {
        if item.id.is_empty() {
            log::debug!("dropping content item with empty id");
            return;
        }
        self.items.write().insert(item.id.clone(), item);
    }

    /// Insert or replace a creator profile by id.
    pub fn upsert_creator(&self, creator: Creator) {
        if creator.id.is_empty() {
            log::debug!("dropping creator with empty id");
            return;
        }
        self.creators.write().insert(creator.id.clone(), creator);
    }

    pub fn get_item(&self, id: &str) -> Option<ContentItem> {
        self.items.read().get(id).cloned()
    }

    pub fn get_creator(&self, id: &str) -> Option<Creator> {
        self.creators.read().get(id).cloned()
    }

    /// Remove a creator. Items referencing it keep their dangling
    /// `creator_id`; creator-name search filters them out at query time.
    pub fn remove_creator(&self, id: &str) -> Option<Creator> {
        self.creators.write().remove(id)
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().len() == 0
    }

    /// Items matching an arbitrary predicate. Iteration order is
    /// unspecified; callers must not depend on it being stable across
    /// successive identical calls.
    pub fn filter<F>(&self, predicate: F) -> Vec<ContentItem>
    where
        F: Fn(&ContentItem) -> bool,
    {
        self.items
            .read()
            .values()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }

    /// Map every item through `f` under a single read lock, keeping the
    /// `Some` results. The workhorse behind every retrieval strategy.
    pub fn scan<T, F>(&self, mut f: F) -> Vec<T>
    where
        F: FnMut(&ContentItem) -> Option<T>,
    {
        self.items.read().values().filter_map(|item| f(item)).collect()
    }

    /// Snapshot of all creator profiles, for strategies that score
    /// against creator names without taking a lock per item.
    pub fn creators_snapshot(&self) -> Vec<Creator> {
        self.creators.read().values().cloned().collect()
    }

    /// Items in a category, most-viewed first.
    pub fn by_category(&self, category: &str, limit: usize, offset: usize) -> Vec<ContentItem> {
        let mut items = self.filter(|item| item.category == category);
        items.sort_by(|a, b| b.view_count.cmp(&a.view_count));
        items.into_iter().skip(offset).take(limit).collect()
    }

    /// Most-viewed items across the whole catalog.
    pub fn popular(&self, limit: usize) -> Vec<ContentItem> {
        let mut items = self.filter(|_| true);
        items.sort_by(|a, b| b.view_count.cmp(&a.view_count));
        items.truncate(limit);
        items
    }

    /// A creator's items, newest first.
    pub fn by_creator(&self, creator_id: &str, limit: usize) -> Vec<ContentItem> {
        let mut items = self.filter(|item| item.creator_id == creator_id);
        items.sort_by(|a, b| b.created_at_ms.cmp(&a.created_at_ms));
        items.truncate(limit);
        items
    }
}
