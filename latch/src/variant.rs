//! Display/interaction profiles.
//!
//! Each variant answers the same capability set; nothing else in the crate
//! branches on which profile it is dealing with beyond these queries and the
//! per-variant row/summary builders in the render module.

/// The closed set of display profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Label plus secondary text.
    #[default]
    Plain,
    /// Icon glyph before the label.
    Icon,
    /// Image glyph before the label.
    Image,
    /// Active-status dot before the label.
    Active,
    /// Single-select with a text filter.
    Search,
    /// Multi-select with a text filter and a chip summary.
    MultiSearch,
}

impl Variant {
    /// Whether selection toggles membership instead of replacing it.
    pub fn is_multi_select(self) -> bool {
        matches!(self, Variant::MultiSearch)
    }

    /// Whether opening activates the text-entry affordance.
    ///
    /// Search profiles also change the trigger's toggle rule: clicking the
    /// open control again does not close it.
    pub fn is_search(self) -> bool {
        matches!(self, Variant::Search | Variant::MultiSearch)
    }
}
