use latch::prelude::*;
use latch::render::chip_summary;

#[test]
fn test_duplicate_values_fail_construction() {
    let options = vec![
        SelectOption::new("a", "Alice"),
        SelectOption::new("a", "Bob"),
    ];
    let err = Select::new(options, SelectConfig::new()).unwrap_err();
    assert_eq!(
        err,
        OptionsError::DuplicateValue {
            value: "a".to_string()
        }
    );
}

#[test]
fn test_missing_value_fails_construction() {
    let options = vec![SelectOption::new("a", "Alice"), SelectOption::new("", "Bob")];
    let err = Select::new(options, SelectConfig::new()).unwrap_err();
    assert_eq!(err, OptionsError::MissingValue { index: 1 });
}

#[test]
fn test_unlabeled_options_are_counted_not_shown() {
    let options = vec![
        SelectOption::new("a", "Alice"),
        SelectOption::bare("b"),
        SelectOption::bare("c"),
    ];
    let select = Select::new(options, SelectConfig::new()).unwrap();
    assert_eq!(select.visible_len(), 1);
    assert_eq!(select.excluded_count(), 2);
}

#[test]
fn test_secondary_text_takes_the_first_word() {
    let option = SelectOption::new("a", "Alice").with_meta("loves long walks");
    assert_eq!(option.secondary_text(ViewField::Meta), Some("loves"));
    assert_eq!(option.secondary_text(ViewField::Label), Some("Alice"));
    assert_eq!(option.secondary_text(ViewField::Icon), None);
    assert_eq!(option.secondary_text(ViewField::Value), Some("a"));
}

#[test]
fn test_secondary_text_passes_single_words_through() {
    let option = SelectOption::new("a", "Alice").with_meta("@alice");
    assert_eq!(option.secondary_text(ViewField::Meta), Some("@alice"));
}

fn selection(count: usize) -> Vec<SelectOption> {
    ["Phoenix Baker", "Olivia Rhye", "Lana Steiner", "Demi Wilkinson"]
        .iter()
        .take(count)
        .enumerate()
        .map(|(i, label)| SelectOption::new(i.to_string(), *label))
        .collect()
}

fn chip_config() -> SelectConfig {
    SelectConfig::new()
        .variant(Variant::MultiSearch)
        .view_field(ViewField::Label)
}

#[test]
fn test_closed_chip_summary_shows_two_plus_overflow() {
    let chips = chip_summary(&selection(3), &chip_config(), false);
    assert_eq!(chips, vec!["Phoenix", "Olivia", "+1"]);
}

#[test]
fn test_open_chip_summary_collapses_to_one() {
    let chips = chip_summary(&selection(3), &chip_config(), true);
    assert_eq!(chips, vec!["Phoenix", "+1"]);
}

#[test]
fn test_chip_summary_without_overflow() {
    let chips = chip_summary(&selection(2), &chip_config(), false);
    assert_eq!(chips, vec!["Phoenix", "Olivia"]);
}

#[test]
fn test_truncation_measures_display_width() {
    use latch::text::{display_width, truncate_to_width};

    assert_eq!(truncate_to_width("hello", 10), "hello");
    assert_eq!(truncate_to_width("hello world", 8), "hello w…");
    assert_eq!(display_width(&truncate_to_width("日本語テキスト", 7)), 7);
    assert_eq!(truncate_to_width("hello", 0), "");
}
