// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search controller: input in, rendered view out.
//!
//! ```text
//! on_input(raw) ─trim─▶ len < min? ──yes──▶ sink.replace(idle)       (matcher untouched)
//!                           │
//!                           no
//!                           ▼
//!               debounced? ──yes──▶ Debouncer ──tick(now)──┐
//!                           │                              ▼
//!                           no ─────────────────────▶ run_query ─▶ matcher ─▶ composer ─▶ sink
//! ```
//!
//! The catalog search is debounced (100ms); the page search is not. That is
//! configuration (`ControllerConfig::debounce`), not a rule baked in here.
//!
//! A short input also cancels whatever query is still waiting in the
//! debouncer, so a stale query can never overwrite the idle view.

use crate::compose::{ResultComposer, ViewModel};
use crate::corpus::Corpus;
use crate::debounce::Debouncer;
use crate::matching::MatchStrategy;
use crate::render::ResultSink;
use crate::types::Grouped;
use crate::utils::trimmed_query;
use std::time::Duration;

/// Query policy for one search surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Trimmed queries shorter than this (in characters) show the idle view.
    pub min_query_len: usize,
    /// `None` runs every query as soon as it is typed.
    pub debounce: Option<Duration>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            min_query_len: 1,
            debounce: None,
        }
    }
}

/// What `on_input` did with a keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Below the minimum length: idle view rendered.
    Idle,
    /// Waiting in the debouncer.
    Scheduled,
    /// Ran immediately.
    Executed { matches: usize },
}

pub struct SearchController<T, M, S> {
    corpus: Corpus<T>,
    matcher: M,
    composer: ResultComposer,
    sink: S,
    min_query_len: usize,
    debouncer: Option<Debouncer<String>>,
}

impl<T, M, S> SearchController<T, M, S>
where
    T: Grouped,
    M: MatchStrategy<T>,
    S: ResultSink<T>,
{
    pub fn new(
        corpus: Corpus<T>,
        matcher: M,
        composer: ResultComposer,
        sink: S,
        config: ControllerConfig,
    ) -> Self {
        Self {
            corpus,
            matcher,
            composer,
            sink,
            min_query_len: config.min_query_len,
            debouncer: config.debounce.map(Debouncer::new),
        }
    }

    /// The input field changed.
    pub fn on_input(&mut self, raw: &str, now: Duration) -> InputOutcome {
        let (query, len) = trimmed_query(raw);
        if len < self.min_query_len {
            if let Some(debouncer) = &mut self.debouncer {
                debouncer.clear();
            }
            self.sink.replace(&ViewModel::idle());
            return InputOutcome::Idle;
        }

        match &mut self.debouncer {
            Some(debouncer) => {
                debouncer.schedule(query.to_string(), now);
                InputOutcome::Scheduled
            }
            None => InputOutcome::Executed {
                matches: self.run_query(query),
            },
        }
    }

    /// Run the debounced query if its quiet period is over.
    ///
    /// Returns `true` if a query ran.
    pub fn tick(&mut self, now: Duration) -> bool {
        let Some(query) = self.debouncer.as_mut().and_then(|d| d.poll(now)) else {
            return false;
        };
        self.run_query(&query);
        true
    }

    /// When `tick` next has work to do.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.debouncer.as_ref().and_then(Debouncer::deadline)
    }

    /// Run a query that arrived with the page (deep link), bypassing the
    /// debouncer so the first paint already shows results.
    ///
    /// Missing or too-short seeds are ignored. Returns whether a query ran.
    pub fn seed(&mut self, query: Option<&str>) -> bool {
        let Some(raw) = query else {
            return false;
        };
        let (query, len) = trimmed_query(raw);
        if len < self.min_query_len {
            return false;
        }
        self.run_query(query);
        true
    }

    /// Match, compose and render `query` right now. Returns the match count.
    pub fn run_query(&mut self, query: &str) -> usize {
        let matches = self.matcher.find(self.corpus.records(), query);
        let total = matches.len();
        let view = self.composer.compose(matches);
        tracing::debug!(query, matches = total, shown = view.shown(), "search executed");
        self.sink.replace(&view);
        total
    }
}

impl<T, M, S> SearchController<T, M, S> {
    pub fn corpus(&self) -> &Corpus<T> {
        &self.corpus
    }

    pub fn matcher(&self) -> &M {
        &self.matcher
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.as_ref().is_some_and(Debouncer::is_pending)
    }
}
