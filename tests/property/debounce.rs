//! Debounce coalescing: a burst yields exactly one action, the last one.

use super::common::{catalog_search, ms, sample_catalog};
use docsight::{Debouncer, ViewKind};
use proptest::prelude::*;
use std::time::Duration;

const DELAY: u64 = 100;

/// Gaps between consecutive calls, each shorter than the delay.
fn burst_strategy() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0..DELAY, 1..30)
}

proptest! {
    #[test]
    fn prop_burst_fires_once_with_last_action(gaps in burst_strategy()) {
        let mut debouncer = Debouncer::new(ms(DELAY));
        let mut now = 0;
        let mut fired = Vec::new();

        for (i, gap) in gaps.iter().enumerate() {
            now += gap;
            // Nothing is ever due inside the burst
            if let Some(action) = debouncer.poll(ms(now)) {
                fired.push(action);
            }
            debouncer.schedule(i, ms(now));
        }
        let last_call = now;

        // Sweep well past the deadline, one millisecond at a time
        let mut fired_at = None;
        for t in last_call..=last_call + 3 * DELAY {
            if let Some(action) = debouncer.poll(ms(t)) {
                fired.push(action);
                fired_at.get_or_insert(t);
            }
        }

        prop_assert_eq!(fired, vec![gaps.len() - 1]);
        prop_assert_eq!(fired_at, Some(last_call + DELAY));
    }

    #[test]
    fn prop_deadline_tracks_last_call(gaps in burst_strategy()) {
        let mut debouncer = Debouncer::new(ms(DELAY));
        let mut now = 0;
        for gap in &gaps {
            now += gap;
            debouncer.schedule((), ms(now));
            prop_assert_eq!(debouncer.deadline(), Some(ms(now + DELAY)));
        }
    }

    #[test]
    fn prop_controller_renders_once_per_burst(gaps in burst_strategy()) {
        let queries = ["a", "ad", "add", "vec", "vector", "print", "draw"];
        let mut search = catalog_search(sample_catalog());
        let mut now = 0;

        for (i, gap) in gaps.iter().enumerate() {
            now += gap;
            search.tick(ms(now));
            search.on_input(queries[i % queries.len()], ms(now));
        }
        search.tick(ms(now + DELAY));
        let last = queries[(gaps.len() - 1) % queries.len()];

        let updates = &search.sink().updates;
        prop_assert_eq!(updates.len(), 1);

        let mut direct = catalog_search(sample_catalog());
        direct.seed(Some(last));
        prop_assert_eq!(&updates[0], direct.sink().last().unwrap());
    }
}

#[test]
fn separate_bursts_each_fire() {
    let mut debouncer = Debouncer::new(Duration::from_millis(DELAY));
    debouncer.schedule("first", ms(0));
    assert_eq!(debouncer.poll(ms(DELAY)), Some("first"));
    debouncer.schedule("second", ms(500));
    assert_eq!(debouncer.poll(ms(550)), None);
    assert_eq!(debouncer.poll(ms(600)), Some("second"));
}

#[test]
fn idle_after_burst_suppresses_results() {
    let mut search = catalog_search(sample_catalog());
    search.on_input("add", ms(0));
    search.on_input("vector", ms(50));
    search.on_input(" ", ms(90));
    search.tick(ms(1_000));
    assert_eq!(search.sink().updates.len(), 1);
    assert_eq!(search.sink().last().unwrap().kind, ViewKind::Idle);
}
