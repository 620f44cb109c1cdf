//! Immutable display configuration supplied by the caller.

use crate::theme::Palette;
use crate::variant::Variant;

/// Sort direction for the derived view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sorting {
    /// Keep the caller's order.
    #[default]
    None,
    /// Ascending by label.
    Asc,
    /// Descending by label.
    Desc,
}

/// Which option attribute supplies the secondary display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewField {
    Value,
    Label,
    #[default]
    Meta,
    Image,
    Icon,
}

/// Display configuration for one [`Select`](crate::Select) instance.
///
/// Read-only from the widget's perspective; built once by the caller and
/// fixed for the widget's lifetime.
#[derive(Debug, Clone)]
pub struct SelectConfig {
    /// Display/interaction profile.
    pub variant: Variant,
    /// Derived-view ordering.
    pub sorting: Sorting,
    /// Attribute feeding the secondary text.
    pub view_field: ViewField,
    /// Control width in columns.
    pub width: u16,
    /// Suppress all interaction and render dimmed.
    pub disabled: bool,
    /// Text shown in the trigger when nothing is selected.
    pub placeholder: Option<String>,
    /// Caption rendered above the trigger.
    pub title: Option<String>,
    /// Hint text revealed below the trigger after the reveal delay.
    pub hint: Option<String>,
    /// Glyph marking selected rows in the dropdown.
    pub selected_marker: String,
    /// Color palette used when rendering.
    pub palette: Palette,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Plain,
            sorting: Sorting::None,
            view_field: ViewField::Meta,
            width: 32,
            disabled: false,
            placeholder: None,
            title: None,
            hint: None,
            selected_marker: "✓".to_string(),
            palette: Palette::dark(),
        }
    }
}

impl SelectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn sorting(mut self, sorting: Sorting) -> Self {
        self.sorting = sorting;
        self
    }

    pub fn view_field(mut self, field: ViewField) -> Self {
        self.view_field = field;
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    pub fn title(mut self, text: impl Into<String>) -> Self {
        self.title = Some(text.into());
        self
    }

    pub fn hint(mut self, text: impl Into<String>) -> Self {
        self.hint = Some(text.into());
        self
    }

    pub fn selected_marker(mut self, glyph: impl Into<String>) -> Self {
        self.selected_marker = glyph.into();
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Placeholder text for the closed trigger, falling back to the
    /// variant's default.
    pub fn effective_placeholder(&self) -> &str {
        match &self.placeholder {
            Some(text) if !self.variant.is_search() => text,
            _ if self.variant.is_search() => "Search",
            _ => "Select",
        }
    }
}
