use std::sync::{Arc, Mutex};

use latch::prelude::*;

fn team() -> Vec<SelectOption> {
    vec![
        SelectOption::new("a", "Alice"),
        SelectOption::new("b", "Bob"),
        SelectOption::new("c", "Charlie"),
    ]
}

type Recorded = Arc<Mutex<Vec<SelectionChange>>>;

fn recording_select(config: SelectConfig) -> (Select, Recorded) {
    let changes: Recorded = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&changes);
    let select = Select::new(team(), config)
        .unwrap()
        .on_change(move |change| sink.lock().unwrap().push(change.clone()));
    (select, changes)
}

fn values(selected: &[SelectOption]) -> Vec<&str> {
    selected.iter().map(|o| o.value.as_str()).collect()
}

#[test]
fn test_single_select_replaces_selection() {
    let (select, changes) = recording_select(SelectConfig::new());

    select.click_trigger();
    assert!(select.click_row(0).is_handled());
    select.click_trigger();
    assert!(select.click_row(1).is_handled());

    assert_eq!(values(&select.selected()), vec!["b"]);

    let changes = changes.lock().unwrap();
    assert_eq!(changes.len(), 2);
    assert!(matches!(&changes[0], SelectionChange::Single(o) if o.value == "a"));
    assert!(matches!(&changes[1], SelectionChange::Single(o) if o.value == "b"));
}

#[test]
fn test_multi_select_toggles_by_value() {
    let (select, changes) =
        recording_select(SelectConfig::new().variant(Variant::MultiSearch));

    select.click_trigger();
    select.click_row(0); // pick A
    select.click_trigger();
    select.click_row(1); // pick B
    select.click_trigger();
    select.click_row(0); // toggle A off

    assert_eq!(values(&select.selected()), vec!["b"]);

    let changes = changes.lock().unwrap();
    assert_eq!(changes.len(), 3);
    let multi = |change: &SelectionChange| match change {
        SelectionChange::Multi(options) => {
            options.iter().map(|o| o.value.clone()).collect::<Vec<_>>()
        }
        SelectionChange::Single(_) => panic!("multi-select must report the full sequence"),
    };
    assert_eq!(multi(&changes[0]), vec!["a"]);
    assert_eq!(multi(&changes[1]), vec!["a", "b"]);
    assert_eq!(multi(&changes[2]), vec!["b"]);
}

#[test]
fn test_selecting_closes_and_clears_search() {
    let (select, _) = recording_select(SelectConfig::new().variant(Variant::Search));

    select.click_trigger();
    assert!(select.is_open());
    assert!(select.is_search_active());

    select.click_row(2);
    assert!(!select.is_open());
    assert!(!select.is_search_active());
    assert_eq!(select.search_text(), "");
    assert_eq!(values(&select.selected()), vec!["c"]);
}

#[test]
fn test_selection_survives_reopening() {
    let (select, _) = recording_select(SelectConfig::new());

    select.click_trigger();
    select.click_row(1);
    select.click_trigger();

    assert!(select.is_open());
    assert_eq!(values(&select.selected()), vec!["b"]);
    assert!(select.is_selected("b"));
    assert!(!select.is_selected("a"));
}

#[test]
fn test_click_below_last_row_selects_nothing() {
    let (select, changes) = recording_select(SelectConfig::new());

    select.click_trigger();
    assert!(select.click_row(99).is_handled());
    assert!(select.selected().is_empty());
    assert!(changes.lock().unwrap().is_empty());
}
