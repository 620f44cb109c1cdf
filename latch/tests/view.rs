use latch::config::Sorting;
use latch::option::SelectOption;
use latch::view::{filter_indices, sorted_view};

fn labels(view: &[SelectOption]) -> Vec<&str> {
    view.iter().filter_map(|o| o.label.as_deref()).collect()
}

#[test]
fn test_ascending_sort_scenario() {
    let options = vec![
        SelectOption::new("a", "Bob"),
        SelectOption::new("b", "Alice"),
    ];
    let (view, excluded) = sorted_view(&options, Sorting::Asc);
    assert_eq!(labels(&view), vec!["Alice", "Bob"]);
    assert_eq!(excluded, 0);
}

#[test]
fn test_descending_sort() {
    let options = vec![
        SelectOption::new("a", "Alice"),
        SelectOption::new("b", "Charlie"),
        SelectOption::new("c", "Bob"),
    ];
    let (view, _) = sorted_view(&options, Sorting::Desc);
    assert_eq!(labels(&view), vec!["Charlie", "Bob", "Alice"]);
}

#[test]
fn test_no_sorting_keeps_caller_order() {
    let options = vec![
        SelectOption::new("a", "Bob"),
        SelectOption::new("b", "Alice"),
    ];
    let (view, _) = sorted_view(&options, Sorting::None);
    assert_eq!(labels(&view), vec!["Bob", "Alice"]);
}

#[test]
fn test_unlabeled_options_are_dropped() {
    let options = vec![
        SelectOption::new("a", "Alice"),
        SelectOption::bare("b"),
        SelectOption::new("c", "Bob"),
    ];
    let (view, excluded) = sorted_view(&options, Sorting::None);
    assert_eq!(labels(&view), vec!["Alice", "Bob"]);
    assert_eq!(excluded, 1);
}

#[test]
fn test_sort_is_case_insensitive() {
    let options = vec![
        SelectOption::new("a", "banana"),
        SelectOption::new("b", "Apple"),
        SelectOption::new("c", "cherry"),
    ];
    let (view, _) = sorted_view(&options, Sorting::Asc);
    assert_eq!(labels(&view), vec!["Apple", "banana", "cherry"]);
}

#[test]
fn test_sorted_view_is_a_permutation() {
    let options: Vec<SelectOption> = ["Delta", "alpha", "Echo", "bravo", "Charlie"]
        .iter()
        .enumerate()
        .map(|(i, label)| SelectOption::new(i.to_string(), *label))
        .collect();

    let (view, _) = sorted_view(&options, Sorting::Asc);
    assert_eq!(view.len(), options.len());
    for option in &options {
        assert!(view.iter().any(|v| v.value == option.value));
    }
    // Monotonic under case-insensitive comparison.
    for pair in view.windows(2) {
        let a = pair[0].label.as_deref().unwrap().to_lowercase();
        let b = pair[1].label.as_deref().unwrap().to_lowercase();
        assert!(a <= b, "{a} should not come after {b}");
    }
}

#[test]
fn test_short_queries_leave_view_unfiltered() {
    let options = vec![
        SelectOption::new("a", "Alice"),
        SelectOption::new("b", "Bob"),
    ];
    let (view, _) = sorted_view(&options, Sorting::None);

    assert_eq!(filter_indices("", &view), vec![0, 1]);
    assert_eq!(filter_indices("x", &view), vec![0, 1]);
}

#[test]
fn test_filter_matches_substring_case_insensitively() {
    let options = vec![
        SelectOption::new("a", "Alice"),
        SelectOption::new("b", "Bob"),
        SelectOption::new("c", "Charlie"),
    ];
    let (view, _) = sorted_view(&options, Sorting::None);

    let matched = filter_indices("LI", &view);
    assert_eq!(matched, vec![0, 2]);
    for &index in &matched {
        let label = view[index].label.as_deref().unwrap().to_lowercase();
        assert!(label.contains("li"));
    }
}

#[test]
fn test_filter_can_exclude_everything() {
    let options = vec![
        SelectOption::new("a", "Alice"),
        SelectOption::new("b", "Bob"),
    ];
    let (view, _) = sorted_view(&options, Sorting::None);
    assert!(filter_indices("zz", &view).is_empty());
}

#[test]
fn test_multibyte_query_counts_chars_not_bytes() {
    let options = vec![SelectOption::new("a", "Über")];
    let (view, _) = sorted_view(&options, Sorting::None);
    // One multibyte character is still a trivially short query.
    assert_eq!(filter_indices("Ü", &view), vec![0]);
}
