//! Select widget state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use ratatui::layout::Rect;

use crate::config::SelectConfig;
use crate::events::ChangeHandler;
use crate::option::{OptionsError, SelectOption, validate_options};
use crate::reveal::RevealHandle;
use crate::view;
use crate::wakeup::{WakeupHandle, WakeupSender};

/// Unique identifier for a Select widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectId(usize);

impl SelectId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for SelectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__select_{}", self.0)
    }
}

/// Internal state for a Select widget.
#[derive(Debug, Default)]
struct SelectInner {
    /// Sorted View: label-bearing options in display order.
    sorted: Vec<SelectOption>,
    /// Filtered View: indices into `sorted` matching the search text.
    filtered: Vec<usize>,
    /// How many label-less options were excluded at construction.
    excluded: usize,
    /// Ordered selection state.
    selected: Vec<SelectOption>,
    /// Current search text (search variants only).
    search_text: String,
    /// Cached trigger area from the last render, for hit-testing.
    trigger_rect: Option<Rect>,
    /// Cached dropdown area from the last render, for hit-testing.
    overlay_rect: Option<Rect>,
}

/// A dropdown select widget.
///
/// `Select` owns all interactive state: the open/closed lifecycle, the
/// search text, the ordered selection, and the hint-reveal one-shot. The
/// caller supplies an option sequence and a [`SelectConfig`] at
/// construction and receives selection changes through the `on_change`
/// callback; everything else is internal render state.
///
/// Cloning is cheap and every clone addresses the same instance, so the
/// host loop, hit-testing, and async tasks can all hold handles.
pub struct Select {
    /// Unique identifier for this select instance.
    id: SelectId,
    /// Caller-supplied display configuration.
    config: Arc<SelectConfig>,
    /// Internal state.
    inner: Arc<RwLock<SelectInner>>,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
    /// Whether the dropdown is open.
    is_open: Arc<AtomicBool>,
    /// Whether the text-entry affordance is active.
    search_active: Arc<AtomicBool>,
    /// Whether the hint label is currently revealed.
    hint_visible: Arc<AtomicBool>,
    /// Cursor position in the dropdown (index into the Filtered View).
    cursor: Arc<AtomicUsize>,
    /// Pending hint-reveal one-shot.
    reveal: RevealHandle,
    /// Redraw signal into the host loop.
    wakeup: WakeupHandle,
    /// Selection-change callback.
    on_change: Option<ChangeHandler>,
}

impl Select {
    /// Build a widget over `options`.
    ///
    /// Fails when any option has an absent or duplicate `value`: selection
    /// membership is keyed on `value` equality, so ambiguous keys would
    /// make two options indistinguishable. Options without a `label` are
    /// accepted but excluded from the derived view.
    pub fn new(options: Vec<SelectOption>, config: SelectConfig) -> Result<Self, OptionsError> {
        validate_options(&options)?;

        let (sorted, excluded) = view::sorted_view(&options, config.sorting);
        if excluded > 0 {
            log::debug!("select: excluded {excluded} option(s) without a label");
        }
        let filtered = (0..sorted.len()).collect();

        Ok(Self {
            id: SelectId::new(),
            config: Arc::new(config),
            inner: Arc::new(RwLock::new(SelectInner {
                sorted,
                filtered,
                excluded,
                ..Default::default()
            })),
            dirty: Arc::new(AtomicBool::new(false)),
            is_open: Arc::new(AtomicBool::new(false)),
            search_active: Arc::new(AtomicBool::new(false)),
            hint_visible: Arc::new(AtomicBool::new(false)),
            cursor: Arc::new(AtomicUsize::new(0)),
            reveal: RevealHandle::new(),
            wakeup: WakeupHandle::new(),
            on_change: None,
        })
    }

    /// Register the selection-change callback.
    pub fn on_change(
        mut self,
        callback: impl Fn(&crate::events::SelectionChange) + Send + Sync + 'static,
    ) -> Self {
        self.on_change = Some(Arc::new(callback));
        self
    }

    /// Install the host loop's wakeup sender and arm the initial hint
    /// reveal (the widget starts closed).
    pub fn mount(&self, sender: WakeupSender) {
        self.wakeup.install(sender);
        self.arm_reveal();
    }

    /// Get the unique ID for this select.
    pub fn id(&self) -> SelectId {
        self.id
    }

    /// Get the ID as a string.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    /// The display configuration this widget was built with.
    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Open/close state
    // -------------------------------------------------------------------------

    /// Check if the dropdown is open.
    pub fn is_open(&self) -> bool {
        self.is_open.load(Ordering::SeqCst)
    }

    /// Check if the text-entry affordance is shown.
    pub fn is_search_active(&self) -> bool {
        self.search_active.load(Ordering::SeqCst)
    }

    /// Check if the hint label is currently revealed.
    pub fn hint_visible(&self) -> bool {
        self.hint_visible.load(Ordering::SeqCst)
    }

    /// Open without activating search. Cursor lands on the current
    /// selection when there is one.
    pub(crate) fn transition_open_plain(&self) {
        if !self.is_open.swap(true, Ordering::SeqCst) {
            self.search_active.store(false, Ordering::SeqCst);
            let cursor = self.selected_visible_index().unwrap_or(0);
            self.cursor.store(cursor, Ordering::SeqCst);
            self.cancel_reveal();
            self.mark_dirty();
        }
    }

    /// Open with the search input active.
    pub(crate) fn transition_open_searching(&self) {
        if !self.is_open.swap(true, Ordering::SeqCst) {
            self.search_active.store(true, Ordering::SeqCst);
            self.cursor.store(0, Ordering::SeqCst);
            self.cancel_reveal();
            self.mark_dirty();
        }
    }

    /// Force the closed state, clearing search state and arming the hint
    /// reveal.
    pub(crate) fn transition_closed(&self) {
        let was_open = self.is_open.swap(false, Ordering::SeqCst);
        let had_search = self.search_active.swap(false, Ordering::SeqCst);
        let had_text = self.reset_search_text();
        if was_open || had_search || had_text {
            self.mark_dirty();
        }
        self.arm_reveal();
    }

    // -------------------------------------------------------------------------
    // Search text
    // -------------------------------------------------------------------------

    /// Current search text.
    pub fn search_text(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.search_text.clone())
            .unwrap_or_default()
    }

    pub(crate) fn push_search_char(&self, c: char) {
        if let Ok(mut guard) = self.inner.write() {
            guard.search_text.push(c);
            self.refilter_locked(&mut guard);
            self.mark_dirty();
        }
    }

    pub(crate) fn pop_search_char(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.search_text.pop().is_some()
        {
            self.refilter_locked(&mut guard);
            self.mark_dirty();
        }
    }

    /// Clear the search text. Returns whether there was any.
    fn reset_search_text(&self) -> bool {
        if let Ok(mut guard) = self.inner.write() {
            let had_text = !guard.search_text.is_empty();
            guard.search_text.clear();
            self.refilter_locked(&mut guard);
            had_text
        } else {
            false
        }
    }

    /// Re-run the filter with the current search text.
    fn refilter_locked(&self, guard: &mut SelectInner) {
        guard.filtered = view::filter_indices(&guard.search_text, &guard.sorted);
        let max = guard.filtered.len().saturating_sub(1);
        if self.cursor.load(Ordering::SeqCst) > max {
            self.cursor.store(0, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Derived views
    // -------------------------------------------------------------------------

    /// The Filtered View in display order.
    pub fn visible_options(&self) -> Vec<SelectOption> {
        self.inner
            .read()
            .map(|guard| {
                guard
                    .filtered
                    .iter()
                    .filter_map(|&index| guard.sorted.get(index).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of rows in the Filtered View.
    pub fn visible_len(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.filtered.len())
            .unwrap_or(0)
    }

    /// The option at a Filtered View row.
    pub fn visible_option(&self, row: usize) -> Option<SelectOption> {
        self.inner.read().ok().and_then(|guard| {
            guard
                .filtered
                .get(row)
                .and_then(|&index| guard.sorted.get(index).cloned())
        })
    }

    /// How many label-less options were dropped at construction.
    pub fn excluded_count(&self) -> usize {
        self.inner.read().map(|guard| guard.excluded).unwrap_or(0)
    }

    // -------------------------------------------------------------------------
    // Selection state
    // -------------------------------------------------------------------------

    /// The ordered selection.
    pub fn selected(&self) -> Vec<SelectOption> {
        self.inner
            .read()
            .map(|guard| guard.selected.clone())
            .unwrap_or_default()
    }

    /// Whether an option with this value is selected.
    pub fn is_selected(&self, value: &str) -> bool {
        self.inner
            .read()
            .map(|guard| guard.selected.iter().any(|option| option.value == value))
            .unwrap_or(false)
    }

    /// Replace the selection wholesale (single-select commit).
    pub(crate) fn replace_selection(&self, option: SelectOption) -> Vec<SelectOption> {
        if let Ok(mut guard) = self.inner.write() {
            guard.selected = vec![option];
            self.mark_dirty();
            guard.selected.clone()
        } else {
            Vec::new()
        }
    }

    /// Toggle membership by value (multi-select commit).
    pub(crate) fn toggle_selection(&self, option: SelectOption) -> Vec<SelectOption> {
        if let Ok(mut guard) = self.inner.write() {
            if guard.selected.iter().any(|s| s.value == option.value) {
                guard.selected.retain(|s| s.value != option.value);
            } else {
                guard.selected.push(option);
            }
            self.mark_dirty();
            guard.selected.clone()
        } else {
            Vec::new()
        }
    }

    /// Row of the first selected option in the Filtered View.
    fn selected_visible_index(&self) -> Option<usize> {
        self.inner.read().ok().and_then(|guard| {
            let first = guard.selected.first()?;
            guard.filtered.iter().position(|&index| {
                guard
                    .sorted
                    .get(index)
                    .is_some_and(|option| option.value == first.value)
            })
        })
    }

    // -------------------------------------------------------------------------
    // Cursor navigation (when open)
    // -------------------------------------------------------------------------

    /// Get the current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor.load(Ordering::SeqCst)
    }

    /// Set the cursor position, clamped to the Filtered View.
    pub(crate) fn set_cursor(&self, index: usize) {
        let max = self.visible_len().saturating_sub(1);
        self.cursor.store(index.min(max), Ordering::SeqCst);
        self.mark_dirty();
    }

    pub(crate) fn cursor_up(&self) {
        let current = self.cursor();
        if current > 0 {
            self.set_cursor(current - 1);
        }
    }

    pub(crate) fn cursor_down(&self) {
        let current = self.cursor();
        if current + 1 < self.visible_len() {
            self.set_cursor(current + 1);
        }
    }

    // -------------------------------------------------------------------------
    // Hint reveal
    // -------------------------------------------------------------------------

    fn arm_reveal(&self) {
        self.reveal.schedule(
            Arc::clone(&self.hint_visible),
            Arc::clone(&self.dirty),
            self.wakeup.clone(),
        );
    }

    fn cancel_reveal(&self) {
        self.reveal.cancel();
        self.hint_visible.store(false, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Render anchors (set during render, read for hit-testing)
    // -------------------------------------------------------------------------

    /// Area of the closed control from the last render.
    pub fn trigger_rect(&self) -> Option<Rect> {
        self.inner
            .read()
            .map(|guard| guard.trigger_rect)
            .unwrap_or(None)
    }

    /// Area of the open dropdown from the last render.
    pub fn overlay_rect(&self) -> Option<Rect> {
        self.inner
            .read()
            .map(|guard| guard.overlay_rect)
            .unwrap_or(None)
    }

    pub(crate) fn set_anchor_rects(&self, trigger: Rect, overlay: Option<Rect>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.trigger_rect = Some(trigger);
            guard.overlay_rect = overlay;
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the widget state has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    pub(crate) fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }

    pub(crate) fn change_handler(&self) -> Option<&ChangeHandler> {
        self.on_change.as_ref()
    }
}

impl Clone for Select {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            config: Arc::clone(&self.config),
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            is_open: Arc::clone(&self.is_open),
            search_active: Arc::clone(&self.search_active),
            hint_visible: Arc::clone(&self.hint_visible),
            cursor: Arc::clone(&self.cursor),
            reveal: self.reveal.clone(),
            wakeup: self.wakeup.clone(),
            on_change: self.on_change.clone(),
        }
    }
}

impl std::fmt::Debug for Select {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Select")
            .field("id", &self.id)
            .field("variant", &self.config.variant)
            .field("is_open", &self.is_open())
            .field("search_active", &self.is_search_active())
            .finish_non_exhaustive()
    }
}
