//! Heading activation: the last heading past the line, monotonic in scroll.

use super::common::make_headings;
use docsight::{Heading, RecordingToc, ScrollOffset, ViewportTracker};
use proptest::prelude::*;

const LINE: f64 = 205.0;

/// Headings with strictly increasing offsets.
fn headings_strategy() -> impl Strategy<Value = Vec<Heading>> {
    prop::collection::vec(1u32..800, 1..12).prop_map(|gaps| {
        let mut offset = 0.0;
        gaps.iter()
            .enumerate()
            .map(|(i, gap)| {
                let heading = Heading::new(format!("h{}", i), offset);
                offset += f64::from(*gap);
                heading
            })
            .collect()
    })
}

/// Brute force: last heading whose top is at or above the line, else the first.
fn expected_active(headings: &[Heading], scroll: f64) -> usize {
    headings
        .iter()
        .rposition(|h| h.offset - scroll <= LINE)
        .unwrap_or(0)
}

fn tracker(headings: Vec<Heading>) -> ViewportTracker {
    let mut tracker = ViewportTracker::new(LINE);
    tracker.attach(headings);
    tracker
}

proptest! {
    #[test]
    fn prop_active_is_last_heading_past_line(headings in headings_strategy(), scroll in 0.0f64..10_000.0) {
        let expected = expected_active(&headings, scroll);
        let mut tracker = tracker(headings.clone());
        let active = tracker.recompute(&ScrollOffset(scroll)).map(str::to_string);
        prop_assert_eq!(active, Some(headings[expected].id.clone()));
    }

    #[test]
    fn prop_active_never_moves_back_when_scrolling_down(
        headings in headings_strategy(),
        scrolls in prop::collection::vec(0.0f64..10_000.0, 1..20),
    ) {
        let mut scrolls = scrolls;
        scrolls.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let ids: Vec<String> = headings.iter().map(|h| h.id.clone()).collect();
        let mut tracker = tracker(headings);

        let mut previous = 0;
        for scroll in scrolls {
            let active = tracker.recompute(&ScrollOffset(scroll)).unwrap().to_string();
            let index = ids.iter().position(|id| *id == active).unwrap();
            prop_assert!(index >= previous);
            previous = index;
        }
    }

    #[test]
    fn prop_one_recompute_per_frame(events_per_frame in prop::collection::vec(1usize..50, 1..10)) {
        let mut tracker = tracker(vec![Heading::new("a", 0.0), Heading::new("b", 1_000.0)]);
        let mut toc = RecordingToc::new();

        for (frame, events) in events_per_frame.iter().enumerate() {
            let requested = (0..*events).filter(|_| tracker.on_scroll()).count();
            prop_assert_eq!(requested, 1);
            prop_assert!(tracker.on_frame(&ScrollOffset(frame as f64 * 500.0), &mut toc));
            prop_assert!(!tracker.on_frame(&ScrollOffset(0.0), &mut toc));
        }
        prop_assert_eq!(toc.activations.len(), events_per_frame.len());
    }
}

#[test]
fn measured_tops_pick_second_heading() {
    let mut tracker = tracker(make_headings(&["intro", "usage", "api"], 300.0));
    assert_eq!(tracker.recompute(&vec![-50.0, 100.0, 650.0]), Some("usage"));
}

#[test]
fn frame_uses_latest_layout() {
    let mut tracker = tracker(make_headings(&["intro", "usage", "api"], 300.0));
    let mut toc = RecordingToc::new();
    // Several scroll positions pass within one frame; only the last is seen
    tracker.on_scroll();
    tracker.on_scroll();
    tracker.on_frame(&ScrollOffset(450.0), &mut toc);
    assert_eq!(toc.activations, vec![Some("api".to_string())]);
}
