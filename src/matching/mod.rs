// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match strategies: query + corpus in, ordered matches out.
//!
//! Two strategies, both generic over anything `Searchable`:
//!
//! | Strategy           | Used for     | Order                    | Score            |
//! |--------------------|--------------|--------------------------|------------------|
//! | `SubstringMatcher` | node catalog | corpus order             | none             |
//! | `FuzzyMatcher`     | page index   | best first, capped       | 0.0 (exact)..=1.0 |
//!
//! Neither strategy caches anything between queries. Every call scans the
//! corpus from scratch; catalogs are a few hundred records at most.

mod approximate;
mod substring;

pub use approximate::{FuzzyConfig, FuzzyMatcher};
pub use substring::SubstringMatcher;

use serde::Serialize;

/// One hit: a borrowed record, where it sits in the corpus, and how good it is.
///
/// `score` is `None` for membership-only strategies (substring). For fuzzy
/// matches lower is better.
#[derive(Debug, PartialEq, Serialize)]
pub struct Match<'c, T> {
    pub item: &'c T,
    pub position: usize,
    pub score: Option<f64>,
}

impl<T> Clone for Match<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Match<'_, T> {}

impl<'c, T> Match<'c, T> {
    pub fn unscored(item: &'c T, position: usize) -> Self {
        Self {
            item,
            position,
            score: None,
        }
    }

    pub fn scored(item: &'c T, position: usize, score: f64) -> Self {
        Self {
            item,
            position,
            score: Some(score),
        }
    }
}

/// A way of turning a query into an ordered list of matches.
pub trait MatchStrategy<T> {
    fn find<'c>(&self, corpus: &'c [T], query: &str) -> Vec<Match<'c, T>>;
}

impl<T, M: MatchStrategy<T> + ?Sized> MatchStrategy<T> for &M {
    fn find<'c>(&self, corpus: &'c [T], query: &str) -> Vec<Match<'c, T>> {
        (**self).find(corpus, query)
    }
}
