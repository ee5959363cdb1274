// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Case-insensitive substring filter.

use super::{Match, MatchStrategy};
use crate::types::Searchable;
use crate::utils::fold_case;

/// Keeps every record whose primary or secondary field contains the query,
/// ignoring case. Output is in corpus order and unscored.
///
/// The query is used as given; an empty query matches everything, so callers
/// enforce their own minimum length (the controller does).
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl SubstringMatcher {
    pub fn new() -> Self {
        Self
    }

    pub fn is_match<T: Searchable>(item: &T, needle: &str) -> bool {
        fold_case(item.primary()).contains(needle) || fold_case(item.secondary()).contains(needle)
    }
}

impl<T: Searchable> MatchStrategy<T> for SubstringMatcher {
    fn find<'c>(&self, corpus: &'c [T], query: &str) -> Vec<Match<'c, T>> {
        let needle = fold_case(query);
        corpus
            .iter()
            .enumerate()
            .filter(|(_, item)| Self::is_match(*item, &needle))
            .map(|(position, item)| Match::unscored(item, position))
            .collect()
    }
}
