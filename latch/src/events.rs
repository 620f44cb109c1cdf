//! Interaction surface for the Select widget.
//!
//! The host environment translates its input (mouse hit-tests, key events,
//! its click-outside convention) into these calls; the widget owns every
//! state transition. All transitions run synchronously inside the call.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::option::SelectOption;
use crate::state::Select;

/// A committed selection change, delivered to the `on_change` callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    /// Single-select variants report the picked option alone.
    Single(SelectOption),
    /// The multi-select variant reports the full ordered selection.
    Multi(Vec<SelectOption>),
}

/// Selection-change callback.
pub type ChangeHandler = Arc<dyn Fn(&SelectionChange) + Send + Sync>;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

impl Select {
    /// A click on the closed-control area.
    ///
    /// Non-search variants toggle. Search variants open with the text input
    /// active and ignore further trigger clicks while open; only an outside
    /// click, Escape, or a selection closes them.
    pub fn click_trigger(&self) -> EventResult {
        if self.config().disabled {
            return EventResult::Ignored;
        }

        if self.config().variant.is_search() {
            if !self.is_open() {
                self.transition_open_searching();
            }
        } else if self.is_open() {
            self.transition_closed();
        } else {
            self.transition_open_plain();
        }
        EventResult::Consumed
    }

    /// A click on the direction indicator.
    ///
    /// Follows the same rule as [`click_trigger`](Self::click_trigger); the
    /// indicator is not a second, differently-behaved toggle.
    pub fn click_indicator(&self) -> EventResult {
        self.click_trigger()
    }

    /// The environment detected a pointer interaction outside the widget's
    /// boundary. Forces the closed state and resets search state,
    /// regardless of where the widget was in its lifecycle.
    pub fn click_outside(&self) {
        if self.config().disabled {
            return;
        }
        self.transition_closed();
    }

    /// A click on a dropdown row (index into the Filtered View).
    pub fn click_row(&self, row: usize) -> EventResult {
        if self.config().disabled || !self.is_open() {
            return EventResult::Ignored;
        }

        match self.visible_option(row) {
            Some(option) => {
                self.commit_selection(option);
                EventResult::Consumed
            }
            // Click landed below the last row.
            None => EventResult::Consumed,
        }
    }

    /// A key event while this widget is focused.
    pub fn handle_key(&self, key: &KeyEvent) -> EventResult {
        if self.config().disabled || key.kind != KeyEventKind::Press {
            return EventResult::Ignored;
        }
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return EventResult::Ignored;
        }

        if !self.is_open() {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => {
                    self.open_for_variant();
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            };
        }

        // Text entry first: while searching, printable keys belong to the
        // search text (including space).
        if self.is_search_active() {
            match key.code {
                KeyCode::Char(c) => {
                    self.push_search_char(c);
                    return EventResult::Consumed;
                }
                KeyCode::Backspace => {
                    self.pop_search_char();
                    return EventResult::Consumed;
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Up => {
                self.cursor_up();
                EventResult::Consumed
            }
            KeyCode::Down => {
                self.cursor_down();
                EventResult::Consumed
            }
            KeyCode::Home => {
                self.set_cursor(0);
                EventResult::Consumed
            }
            KeyCode::End => {
                self.set_cursor(self.visible_len().saturating_sub(1));
                EventResult::Consumed
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let cursor = self.cursor();
                self.click_row(cursor)
            }
            KeyCode::Esc => {
                self.transition_closed();
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    /// Open according to the variant's profile.
    fn open_for_variant(&self) {
        if self.config().variant.is_search() {
            self.transition_open_searching();
        } else {
            self.transition_open_plain();
        }
    }

    /// Commit a pick: mutate the selection per the variant's selection
    /// mode, close the dropdown, and notify the callback.
    fn commit_selection(&self, option: SelectOption) {
        let change = if self.config().variant.is_multi_select() {
            SelectionChange::Multi(self.toggle_selection(option))
        } else {
            self.replace_selection(option.clone());
            SelectionChange::Single(option)
        };

        self.transition_closed();

        if let Some(callback) = self.change_handler() {
            callback(&change);
        }
    }
}
