// Copyright 2025-present Amplifi
// SPDX-License-Identifier: Apache-2.0

//! Search history: the one piece of state that outlives a session.
//!
//! History is an explicit store injected into the engine, not ambient
//! global state, so the cap/eviction logic is testable on its own. The
//! contract all stores share:
//!
//! - most-recent-first ordering;
//! - capped at [`HISTORY_CAP`] entries, oldest evicted first (FIFO by
//!   insertion, not by access);
//! - trim and append are one logical operation under the write lock;
//! - persistence failure never reaches the caller - the in-memory copy
//!   still updates and a warning is logged.

use crate::types::SearchRecord;
use parking_lot::RwLock;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Maximum retained history entries.
pub const HISTORY_CAP: usize = 50;

/// Why a history write failed to persist. Informational only; callers
/// of the store never see it.
#[derive(Debug)]
pub enum HistoryError {
    /// The backing storage rejected the write (quota, permissions, I/O).
    StorageUnavailable { reason: String },
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::StorageUnavailable { reason } => {
                write!(f, "history storage unavailable: {}", reason)
            }
        }
    }
}

impl std::error::Error for HistoryError {}

impl From<io::Error> for HistoryError {
    fn from(error: io::Error) -> Self {
        HistoryError::StorageUnavailable {
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for HistoryError {
    fn from(error: serde_json::Error) -> Self {
        HistoryError::StorageUnavailable {
            reason: error.to_string(),
        }
    }
}

/// Storage for executed searches. Implementations must uphold the
/// ordering and cap contract documented at module level.
pub trait HistoryStore: Send + Sync {
    /// Prepend a record, evicting the oldest entry past the cap.
    fn append(&self, record: SearchRecord);

    /// All retained records, most recent first.
    fn list(&self) -> Vec<SearchRecord>;

    fn clear(&self);
}

/// Prepend under the cap. Shared by both stores so the eviction rule
/// lives in exactly one place.
fn push_capped(records: &mut Vec<SearchRecord>, record: SearchRecord) {
    records.insert(0, record);
    records.truncate(HISTORY_CAP);
}

/// Session-only history. The default for hosts without durable storage.
#[derive(Default)]
pub struct MemoryHistoryStore {
    records: RwLock<Vec<SearchRecord>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        MemoryHistoryStore::default()
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn append(&self, record: SearchRecord) {
        push_capped(&mut self.records.write(), record);
    }

    fn list(&self) -> Vec<SearchRecord> {
        self.records.read().clone()
    }

    fn clear(&self) {
        self.records.write().clear();
    }
}

/// History persisted as one JSON array file, most-recent-first - the
/// single durable key this crate owns.
///
/// Reads happen once at open; afterwards the in-memory copy is the
/// source of truth and every mutation rewrites the file. A failed
/// rewrite is logged and swallowed: the session keeps its history,
/// it just won't survive a restart.
pub struct FileHistoryStore {
    path: PathBuf,
    records: RwLock<Vec<SearchRecord>>,
}

impl FileHistoryStore {
    /// Open a store at `path`, loading any existing history. A missing
    /// file is an empty history; an unreadable or corrupt one is logged
    /// and treated the same.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = match Self::load(&path) {
            Ok(records) => records,
            Err(error) => {
                log::warn!("could not load search history from {:?}: {}", path, error);
                Vec::new()
            }
        };
        FileHistoryStore {
            path,
            records: RwLock::new(records),
        }
    }

    fn load(path: &Path) -> Result<Vec<SearchRecord>, HistoryError> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(path)?;
        let mut records: Vec<SearchRecord> = serde_json::from_str(&raw)?;
        records.truncate(HISTORY_CAP);
        Ok(records)
    }

    fn persist(&self, records: &[SearchRecord]) -> Result<(), HistoryError> {
        let encoded = serde_json::to_string(records)?;
        fs::write(&self.path, encoded)?;
        Ok(())
    }
}

impl HistoryStore for FileHistoryStore {
    fn append(&self, record: SearchRecord) {
        let mut records = self.records.write();
        push_capped(&mut records, record);
        if let Err(error) = self.persist(&records) {
            log::warn!("search history not persisted: {}", error);
        }
    }

    fn list(&self) -> Vec<SearchRecord> {
        self.records.read().clone()
    }

    fn clear(&self) {
        let mut records = self.records.write();
        records.clear();
        if let Err(error) = self.persist(&records) {
            log::warn!("search history not persisted: {}", error);
        }
    }
}
