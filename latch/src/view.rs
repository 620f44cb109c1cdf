//! Derived view computation.
//!
//! Pure functions producing the Sorted View (label-bearing subset, ordered)
//! and the Filtered View (indices into the Sorted View matching the search
//! text). Recomputed synchronously; never mutated in place.

use std::cmp::Ordering;

use crate::config::Sorting;
use crate::option::SelectOption;

/// Queries of this character length or shorter leave the view unfiltered.
///
/// A single keystroke filters to noise, so filtering only engages from the
/// second character on.
pub const MIN_QUERY_CHARS: usize = 2;

/// Build the Sorted View: drop options lacking a label, then order by
/// case-insensitive label comparison per `sorting`.
///
/// Returns the view together with the number of excluded label-less options.
pub fn sorted_view(options: &[SelectOption], sorting: Sorting) -> (Vec<SelectOption>, usize) {
    let mut view: Vec<SelectOption> = options
        .iter()
        .filter(|option| option.label.is_some())
        .cloned()
        .collect();
    let excluded = options.len() - view.len();

    match sorting {
        Sorting::None => {}
        Sorting::Asc => view.sort_by(compare_labels),
        Sorting::Desc => view.sort_by(|a, b| compare_labels(a, b).reverse()),
    }

    (view, excluded)
}

/// Case-insensitive label comparison with a raw-label tiebreak so the order
/// is total and deterministic.
fn compare_labels(a: &SelectOption, b: &SelectOption) -> Ordering {
    let a_label = a.label.as_deref().unwrap_or_default();
    let b_label = b.label.as_deref().unwrap_or_default();
    a_label
        .to_lowercase()
        .cmp(&b_label.to_lowercase())
        .then_with(|| a_label.cmp(b_label))
}

/// Build the Filtered View: indices into `view` whose labels contain `query`
/// case-insensitively.
///
/// Queries shorter than [`MIN_QUERY_CHARS`] return every index unchanged.
pub fn filter_indices(query: &str, view: &[SelectOption]) -> Vec<usize> {
    if query.chars().count() < MIN_QUERY_CHARS {
        return (0..view.len()).collect();
    }

    let needle = query.to_lowercase();
    view.iter()
        .enumerate()
        .filter(|(_, option)| {
            option
                .label
                .as_deref()
                .is_some_and(|label| label.to_lowercase().contains(&needle))
        })
        .map(|(index, _)| index)
        .collect()
}
