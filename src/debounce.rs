// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Call coalescing.
//!
//! A `Debouncer` owns at most one pending action and the instant it becomes
//! due. Scheduling again replaces both: the previous action is dropped
//! unexecuted and the quiet period restarts. Only the last action of a burst
//! ever comes out of `poll`.
//!
//! Time is passed in, never read. `now` is a `Duration` since any fixed
//! epoch (page load in the browser, a test's start otherwise), which keeps
//! the type usable on `wasm32-unknown-unknown` and deterministic in tests.
//!
//! ```
//! use docsight::Debouncer;
//! use std::time::Duration;
//!
//! let ms = Duration::from_millis;
//! let mut debouncer = Debouncer::new(ms(100));
//! debouncer.schedule("a", ms(0));
//! debouncer.schedule("ab", ms(40));
//! assert_eq!(debouncer.poll(ms(120)), None);
//! assert_eq!(debouncer.poll(ms(140)), Some("ab"));
//! ```

use std::time::Duration;

#[derive(Debug)]
struct Pending<A> {
    action: A,
    due: Duration,
}

#[derive(Debug)]
pub struct Debouncer<A> {
    delay: Duration,
    pending: Option<Pending<A>>,
}

impl<A> Debouncer<A> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace any pending action and restart the delay from `now`.
    ///
    /// A deadline past `Duration::MAX` saturates.
    pub fn schedule(&mut self, action: A, now: Duration) {
        self.pending = Some(Pending {
            action,
            due: now.saturating_add(self.delay),
        });
    }

    /// Take the pending action if its quiet period has fully elapsed.
    pub fn poll(&mut self, now: Duration) -> Option<A> {
        let due = self.pending.as_ref()?.due;
        if now < due {
            return None;
        }
        self.pending.take().map(|p| p.action)
    }

    /// When the pending action becomes due, if there is one.
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.as_ref().map(|p| p.due)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending action without running it.
    pub(crate) fn clear(&mut self) {
        self.pending = None;
    }
}
