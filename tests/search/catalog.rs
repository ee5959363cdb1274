//! Node catalog search: substring matching, debounce, capping, grouping.

use super::common::{catalog_search, init_tracing, make_record, ms, sample_catalog};
use docsight::{InputOutcome, ViewKind};

#[test]
fn case_insensitive_and_order_preserving() {
    init_tracing();
    let mut search = catalog_search(vec![
        make_record("Add", "Operators", "sum two"),
        make_record("sub", "Operators", "Difference"),
    ]);
    search.seed(Some("ADD"));

    let view = search.sink().last().unwrap();
    assert_eq!(view.kind, ViewKind::Results);
    assert_eq!(view.positions(), vec![0]);
    assert_eq!(view.total, 1);
}

#[test]
fn matches_description_as_well_as_name() {
    let mut search = catalog_search(sample_catalog());
    search.seed(Some("value"));
    // Add, Subtract, Print: all by description, in catalog order
    assert_eq!(search.sink().last().unwrap().positions(), vec![0, 1, 2]);
}

#[test]
fn typing_burst_renders_once_with_last_query() {
    init_tracing();
    let mut search = catalog_search(sample_catalog());

    for (i, prefix) in ["v", "ve", "vec", "vect"].iter().enumerate() {
        assert_eq!(
            search.on_input(prefix, ms(i as u64 * 40)),
            InputOutcome::Scheduled
        );
    }
    assert_eq!(search.next_deadline(), Some(ms(220)));

    assert!(!search.tick(ms(219)));
    assert!(search.sink().updates.is_empty());

    assert!(search.tick(ms(220)));
    let updates = &search.sink().updates;
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].positions(), vec![3, 4]);
}

#[test]
fn pauses_longer_than_the_delay_run_each_query() {
    let mut search = catalog_search(sample_catalog());
    search.on_input("print", ms(0));
    assert!(search.tick(ms(100)));
    search.on_input("draw", ms(150));
    assert!(search.tick(ms(250)));

    let updates = &search.sink().updates;
    assert_eq!(updates.len(), 2);
    assert_eq!(updates[0].positions(), vec![2]);
    assert_eq!(updates[1].positions(), vec![5]);
}

#[test]
fn whitespace_only_input_is_idle_immediately() {
    let mut search = catalog_search(sample_catalog());
    assert_eq!(search.on_input(" \t ", ms(0)), InputOutcome::Idle);
    let view = search.sink().last().unwrap();
    assert_eq!(view.kind, ViewKind::Idle);
    assert!(view.groups.is_empty());
    assert_eq!(view.remaining, 0);
    assert_eq!(search.next_deadline(), None);
}

#[test]
fn clearing_input_cancels_the_pending_query() {
    let mut search = catalog_search(sample_catalog());
    search.on_input("add", ms(0));
    search.on_input("", ms(10));
    assert!(!search.tick(ms(1_000)));
    assert_eq!(search.sink().updates.len(), 1);
    assert_eq!(search.sink().last().unwrap().kind, ViewKind::Idle);
}

#[test]
fn caps_at_four_and_counts_the_rest() {
    let mut search = catalog_search(sample_catalog());
    // Every record has an 'a' in its name or description
    search.seed(Some("a"));

    let view = search.sink().last().unwrap();
    assert_eq!(view.total, 6);
    assert_eq!(view.positions(), vec![0, 1, 2, 3]);
    assert_eq!(view.remaining, 2);
}

#[test]
fn groups_follow_first_encounter_among_shown() {
    let mut search = catalog_search(sample_catalog());
    search.seed(Some("a"));

    let view = search.sink().last().unwrap();
    let categories: Vec<&str> = view.groups.iter().map(|(c, _)| c.as_str()).collect();
    assert_eq!(categories, vec!["Operators", "Debug", "Math"]);
    assert_eq!(view.groups[0].1, vec![0, 1]);
    // "Draw Line" (Debug) is past the cap and does not join the Debug group
    assert_eq!(view.groups[1].1, vec![2]);
}

#[test]
fn interleaved_categories_group_in_encounter_order() {
    let mut search = catalog_search(vec![
        make_record("first", "B", "node"),
        make_record("second", "A", "node"),
        make_record("third", "B", "node"),
    ]);
    search.seed(Some("node"));

    let view = search.sink().last().unwrap();
    assert_eq!(
        view.groups,
        vec![("B".to_string(), vec![0, 2]), ("A".to_string(), vec![1])]
    );
    assert_eq!(view.remaining, 0);
}

#[test]
fn no_matches_is_distinct_from_idle() {
    let mut search = catalog_search(sample_catalog());
    search.seed(Some("quaternion"));
    let view = search.sink().last().unwrap();
    assert_eq!(view.kind, ViewKind::NoMatches);
    assert_eq!(view.total, 0);
}
