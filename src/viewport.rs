// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Which heading is the reader looking at?
//!
//! The active heading is the last one whose top has scrolled past a fixed
//! activation line (205px below the viewport top on the shipped site). When
//! nothing has crossed the line yet, the first heading is active.
//!
//! Scroll events arrive far more often than frames are painted, so
//! recomputation goes through a `FrameSampler`: the first scroll event of a
//! frame requests a frame callback, the rest are absorbed, and the callback
//! recomputes once against whatever the layout is at that moment. Positions
//! in between are never looked at.
//!
//! # Lifecycle
//!
//! ```text
//! new() ──attach(headings)──▶ attached ──on_scroll()/on_frame()──▶ ...
//!                               │
//!                               └──detach()──▶ detached (no headings, idle sampler)
//! ```

use crate::render::TocSink;
use crate::types::Heading;

/// Two-state frame coalescer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FrameSampler {
    #[default]
    Idle,
    /// A frame callback has been requested and has not run yet.
    Pending,
}

impl FrameSampler {
    /// Note a scroll event.
    ///
    /// Returns `true` exactly when the caller should request a frame callback,
    /// i.e. on the transition from `Idle` to `Pending`.
    pub fn request(&mut self) -> bool {
        match self {
            FrameSampler::Idle => {
                *self = FrameSampler::Pending;
                true
            }
            FrameSampler::Pending => false,
        }
    }

    /// Frame callback: run `sample` if a sample was requested, then go idle.
    pub fn run<R>(&mut self, sample: impl FnOnce() -> R) -> Option<R> {
        match self {
            FrameSampler::Idle => None,
            FrameSampler::Pending => {
                let result = sample();
                *self = FrameSampler::Idle;
                Some(result)
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        *self == FrameSampler::Pending
    }
}

/// Current heading positions, relative to the viewport top.
pub trait HeadingLayout {
    fn top(&self, index: usize, heading: &Heading) -> f64;
}

/// Derive tops from a scroll position: `offset - scroll_y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollOffset(pub f64);

impl HeadingLayout for ScrollOffset {
    fn top(&self, _index: usize, heading: &Heading) -> f64 {
        heading.offset - self.0
    }
}

/// Measured tops, index-aligned with the headings (what a browser reports via
/// `getBoundingClientRect`). Missing entries count as below the fold.
impl HeadingLayout for [f64] {
    fn top(&self, index: usize, _heading: &Heading) -> f64 {
        self.get(index).copied().unwrap_or(f64::INFINITY)
    }
}

impl HeadingLayout for Vec<f64> {
    fn top(&self, index: usize, heading: &Heading) -> f64 {
        self.as_slice().top(index, heading)
    }
}

#[derive(Debug, Clone)]
pub struct ViewportTracker {
    headings: Vec<Heading>,
    activation_offset: f64,
    active: Option<usize>,
    sampler: FrameSampler,
}

impl ViewportTracker {
    pub fn new(activation_offset: f64) -> Self {
        Self {
            headings: Vec::new(),
            activation_offset,
            active: None,
            sampler: FrameSampler::Idle,
        }
    }

    /// Bind to a document's headings (document order) and activate the first.
    pub fn attach(&mut self, headings: Vec<Heading>) {
        self.active = if headings.is_empty() { None } else { Some(0) };
        self.headings = headings;
        self.sampler = FrameSampler::Idle;
    }

    /// Drop the headings and any pending sample.
    pub fn detach(&mut self) {
        self.headings.clear();
        self.active = None;
        self.sampler = FrameSampler::Idle;
    }

    pub fn is_attached(&self) -> bool {
        !self.headings.is_empty()
    }

    pub fn headings(&self) -> &[Heading] {
        &self.headings
    }

    pub fn activation_offset(&self) -> f64 {
        self.activation_offset
    }

    pub fn active(&self) -> Option<&str> {
        self.active
            .and_then(|i| self.headings.get(i))
            .map(|h| h.id.as_str())
    }

    pub fn sampler(&self) -> FrameSampler {
        self.sampler
    }

    /// Recompute the active heading from the current layout.
    ///
    /// Scans in document order and stops at the first heading below the
    /// activation line; headings are assumed to be monotonically placed.
    pub fn recompute<L: HeadingLayout + ?Sized>(&mut self, layout: &L) -> Option<&str> {
        if self.headings.is_empty() {
            self.active = None;
            return None;
        }

        let mut current = 0;
        for (index, heading) in self.headings.iter().enumerate() {
            if layout.top(index, heading) <= self.activation_offset {
                current = index;
            } else {
                break;
            }
        }

        if self.active != Some(current) {
            tracing::debug!(heading = %self.headings[current].id, "active heading changed");
        }
        self.active = Some(current);
        self.active()
    }

    /// Scroll event. Returns `true` if a frame callback should be requested.
    pub fn on_scroll(&mut self) -> bool {
        self.is_attached() && self.sampler.request()
    }

    /// Frame callback: recompute once if a scroll was sampled and push the
    /// result to `sink`. Returns whether a recomputation happened.
    pub fn on_frame<L, S>(&mut self, layout: &L, sink: &mut S) -> bool
    where
        L: HeadingLayout + ?Sized,
        S: TocSink + ?Sized,
    {
        let mut sampler = self.sampler;
        let ran = sampler
            .run(|| {
                let active = self.recompute(layout).map(str::to_string);
                sink.activate(active.as_deref());
            })
            .is_some();
        self.sampler = sampler;
        ran
    }
}

impl Default for ViewportTracker {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_ACTIVATION_OFFSET)
    }
}
