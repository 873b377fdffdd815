// Copyright 2025-present Amplifi
// SPDX-License-Identifier: Apache-2.0

//! Retrieval strategies: independent ways of finding candidates.
//!
//! Each strategy scans the catalog and scores its own kind of match.
//! The planner is agnostic to how many strategies exist or what they
//! do - `TranscriptStrategy` is a stub returning nothing, kept so that
//! filling it in later changes no planner code.
//!
//! A strategy error never escapes the planner; it becomes an empty
//! contribution and a logged warning.

use crate::catalog::Catalog;
use crate::scoring::{creator_score, tag_score, title_score};
use crate::types::{ParsedQuery, StrategyHit, StrategyKind};
use std::collections::HashMap;
use std::fmt;

/// A strategy failed internally. Carries the failing strategy's kind
/// and an operator-facing message; callers of `search` never see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyError {
    pub kind: StrategyKind,
    pub message: String,
}

impl StrategyError {
    pub fn new(kind: StrategyKind, message: impl Into<String>) -> Self {
        StrategyError {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for StrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} strategy failed: {}", self.kind, self.message)
    }
}

impl std::error::Error for StrategyError {}

/// One independent retrieval method contributing candidate hits.
pub trait SearchStrategy: Send + Sync {
    fn kind(&self) -> StrategyKind;

    /// Raw hits for this query. May legitimately return zero hits;
    /// an `Err` is caught by the planner and degrades to zero hits.
    fn execute(
        &self,
        query: &ParsedQuery,
        catalog: &Catalog,
    ) -> Result<Vec<StrategyHit>, StrategyError>;
}

/// Title/description substring match, scored by title match strength.
///
/// An item qualifies if any query term appears in its lowercased title
/// or description. Description matches carry no score of their own -
/// the title score (possibly 0) is the base, and boosts do the rest.
pub struct TitleStrategy;

impl SearchStrategy for TitleStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Title
    }

    fn execute(
        &self,
        query: &ParsedQuery,
        catalog: &Catalog,
    ) -> Result<Vec<StrategyHit>, StrategyError> {
        Ok(catalog.scan(|item| {
            let title_lower = item.title.to_lowercase();
            let description_lower = item.description.to_lowercase();
            let matched = query.terms.iter().any(|term| {
                title_lower.contains(term.as_str()) || description_lower.contains(term.as_str())
            });
            if !matched {
                return None;
            }
            Some(StrategyHit {
                base_score: title_score(&title_lower, &query.terms),
                item: item.clone(),
            })
        }))
    }
}

/// Tag intersection match, scored additively over (tag, term) pairs.
pub struct TagStrategy;

impl SearchStrategy for TagStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Tag
    }

    fn execute(
        &self,
        query: &ParsedQuery,
        catalog: &Catalog,
    ) -> Result<Vec<StrategyHit>, StrategyError> {
        Ok(catalog.scan(|item| {
            let score = tag_score(&item.tags, &query.terms);
            if score <= 0.0 {
                return None;
            }
            Some(StrategyHit {
                base_score: score,
                item: item.clone(),
            })
        }))
    }
}

/// Creator-name match: the query is scored against each creator's
/// display name, and every item of a matching creator becomes a hit.
///
/// Items whose `creator_id` resolves to no known creator contribute
/// nothing - dangling references are filtered here, at query time.
pub struct CreatorStrategy;

impl SearchStrategy for CreatorStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Creator
    }

    fn execute(
        &self,
        query: &ParsedQuery,
        catalog: &Catalog,
    ) -> Result<Vec<StrategyHit>, StrategyError> {
        // Score each creator once, then scan items against the map.
        let creator_scores: HashMap<String, f64> = catalog
            .creators_snapshot()
            .into_iter()
            .filter_map(|creator| {
                let score = creator_score(&creator.display_name, &query.text);
                (score > 0.0).then_some((creator.id, score))
            })
            .collect();

        if creator_scores.is_empty() {
            return Ok(Vec::new());
        }

        Ok(catalog.scan(|item| {
            let score = *creator_scores.get(&item.creator_id)?;
            Some(StrategyHit {
                base_score: score,
                item: item.clone(),
            })
        }))
    }
}

/// Placeholder for transcript search. Always returns nothing; exists so
/// the planner's contract already covers it when transcripts arrive.
pub struct TranscriptStrategy;

impl SearchStrategy for TranscriptStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Transcript
    }

    fn execute(
        &self,
        _query: &ParsedQuery,
        _catalog: &Catalog,
    ) -> Result<Vec<StrategyHit>, StrategyError> {
        Ok(Vec::new())
    }
}
