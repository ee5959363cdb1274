// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result composition: cap, group, and annotate a match list for display.
//!
//! The composer never re-sorts. It takes the first `max_shown` matches in the
//! order the strategy produced them, then partitions those into groups keyed by
//! category. Groups appear in the order their category is first seen among the
//! shown matches, not in corpus order and not alphabetically.
//!
//! # Invariant
//!
//! `shown() + remaining == total` for every view model produced here.

use crate::matching::Match;
use crate::types::Grouped;
use serde::Serialize;

/// Which branch the renderer should take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewKind {
    /// No query yet (or below the minimum length).
    Idle,
    /// A query ran and found nothing.
    NoMatches,
    Results,
}

/// Matches sharing a category, in shown order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group<'c, T> {
    pub category: &'c str,
    pub matches: Vec<Match<'c, T>>,
}

/// Render-ready search outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel<'c, T> {
    pub kind: ViewKind,
    pub groups: Vec<Group<'c, T>>,
    /// Matches that exist but were not shown.
    pub remaining: usize,
    /// Total match count before capping.
    pub total: usize,
}

impl<'c, T> ViewModel<'c, T> {
    /// The "start typing" state.
    pub fn idle() -> Self {
        Self {
            kind: ViewKind::Idle,
            groups: Vec::new(),
            remaining: 0,
            total: 0,
        }
    }

    pub fn no_matches() -> Self {
        Self {
            kind: ViewKind::NoMatches,
            ..Self::idle()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.kind != ViewKind::Results
    }

    /// Number of matches across all groups.
    pub fn shown(&self) -> usize {
        self.groups.iter().map(|g| g.matches.len()).sum()
    }

    /// Shown matches in display order, ignoring grouping.
    pub fn iter(&self) -> impl Iterator<Item = &Match<'c, T>> {
        self.groups.iter().flat_map(|g| g.matches.iter())
    }
}

/// Caps and groups match lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultComposer {
    max_shown: usize,
}

impl ResultComposer {
    pub fn new(max_shown: usize) -> Self {
        Self { max_shown }
    }

    pub fn max_shown(&self) -> usize {
        self.max_shown
    }

    pub fn compose<'c, T: Grouped>(&self, mut matches: Vec<Match<'c, T>>) -> ViewModel<'c, T> {
        if matches.is_empty() {
            return ViewModel::no_matches();
        }

        let total = matches.len();
        matches.truncate(self.max_shown);
        let remaining = total.saturating_sub(self.max_shown);

        // Linear scan: a handful of shown matches, no map needed
        let mut groups: Vec<Group<'c, T>> = Vec::new();
        for m in matches {
            let category = m.item.group_key();
            match groups.iter_mut().find(|g| g.category == category) {
                Some(group) => group.matches.push(m),
                None => groups.push(Group {
                    category,
                    matches: vec![m],
                }),
            }
        }

        ViewModel {
            kind: ViewKind::Results,
            groups,
            remaining,
            total,
        }
    }
}

impl Default for ResultComposer {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MAX_SHOWN)
    }
}
