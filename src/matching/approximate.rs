// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Threshold-based fuzzy ranking over two weighted fields.
//!
//! Scoring, per candidate:
//!
//! ```text
//! field_score = min(1, substring_distance(query, field) / len(query) / weight)
//! score       = min(field_score(primary), field_score(secondary))
//! ```
//!
//! A candidate is kept iff `score <= threshold` (the boundary is inclusive).
//! Kept candidates are stable-sorted by ascending score, so equal scores stay
//! in corpus order, then cut to `limit`.

use super::{Match, MatchStrategy};
use crate::config::{DEFAULT_PAGE_LIMIT, DEFAULT_THRESHOLD};
use crate::fuzzy::substring_distance;
use crate::types::Searchable;
use crate::utils::fold;
use std::cmp::Ordering;

/// Slack for comparing edit counts against a fractional allowance.
const SCORE_EPSILON: f64 = 1e-9;

/// Fuzzy matcher settings.
///
/// `threshold` is on the normalized 0..=1 scale; lower is stricter.
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyConfig {
    pub threshold: f64,
    pub limit: usize,
    pub title_weight: f64,
    pub content_weight: f64,
    pub ignore_diacritics: bool,
}

impl Default for FuzzyConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            limit: DEFAULT_PAGE_LIMIT,
            title_weight: 1.0,
            content_weight: 1.0,
            ignore_diacritics: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FuzzyMatcher {
    config: FuzzyConfig,
}

impl FuzzyMatcher {
    pub fn new(config: FuzzyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FuzzyConfig {
        &self.config
    }

    /// Score one candidate against an already folded, non-empty pattern.
    ///
    /// Returns `None` when the candidate is worse than the threshold.
    pub fn score<T: Searchable>(&self, pattern: &str, item: &T) -> Option<f64> {
        let pattern_len = pattern.chars().count();
        let primary = self.field_score(pattern, pattern_len, item.primary(), self.config.title_weight);
        let secondary = self.field_score(
            pattern,
            pattern_len,
            item.secondary(),
            self.config.content_weight,
        );

        let best = match (primary, secondary) {
            (Some(a), Some(b)) => a.min(b),
            (Some(a), None) | (None, Some(a)) => a,
            (None, None) => return None,
        };
        Some(best)
    }

    fn field_score(&self, pattern: &str, pattern_len: usize, field: &str, weight: f64) -> Option<f64> {
        // Any edit count above this bound scores worse than the threshold.
        // It is an over-estimate; the exact comparison follows.
        let bound = (self.config.threshold * weight * pattern_len as f64).floor() as usize + 1;
        let field = fold(field, self.config.ignore_diacritics);
        let distance = substring_distance(pattern, &field, bound.min(pattern_len))?;
        // Compared as edit counts so the boundary stays inclusive under weights.
        let allowed = self.config.threshold * weight * pattern_len as f64;
        if self.config.threshold < 1.0 && distance as f64 > allowed + SCORE_EPSILON {
            return None;
        }
        let score = (distance as f64 / pattern_len as f64 / weight).min(1.0);
        Some(score.min(self.config.threshold))
    }
}

impl<T: Searchable> MatchStrategy<T> for FuzzyMatcher {
    fn find<'c>(&self, corpus: &'c [T], query: &str) -> Vec<Match<'c, T>> {
        let pattern = fold(query.trim(), self.config.ignore_diacritics);
        if pattern.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<Match<'c, T>> = corpus
            .iter()
            .enumerate()
            .filter_map(|(position, item)| {
                self.score(&pattern, item)
                    .map(|score| Match::scored(item, position, score))
            })
            .collect();

        // sort_by is stable: ties keep corpus order
        matches.sort_by(|a, b| {
            a.score
                .partial_cmp(&b.score)
                .unwrap_or(Ordering::Equal)
        });
        matches.truncate(self.config.limit);
        matches
    }
}
