//! The option record consumed by the Select widget.

use thiserror::Error;

use crate::config::ViewField;

/// One selectable entry.
///
/// `value` is the identity key for selection membership and must be present
/// and unique within a widget's option sequence; construction of a
/// [`Select`](crate::Select) fails otherwise. Everything else is display
/// data: `label` is the primary text (options without one are dropped from
/// the derived view), `meta` is secondary text, and `icon`/`image` are glyph
/// strings standing in for visual assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Identity key for selection membership.
    pub value: String,
    /// Primary display text.
    pub label: Option<String>,
    /// Secondary display text.
    pub meta: Option<String>,
    /// Status flag consumed by the active-status variant.
    pub is_active: bool,
    /// Glyph shown by the image variant.
    pub image: Option<String>,
    /// Glyph shown by the icon variant.
    pub icon: Option<String>,
}

impl SelectOption {
    /// Create a labeled option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: Some(label.into()),
            meta: None,
            is_active: false,
            image: None,
            icon: None,
        }
    }

    /// Create an option without a label.
    ///
    /// Label-less options are excluded from the derived view; this exists
    /// for callers that filter or enrich their data later.
    pub fn bare(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: None,
            meta: None,
            is_active: false,
            image: None,
            icon: None,
        }
    }

    /// Set the secondary display text.
    pub fn with_meta(mut self, meta: impl Into<String>) -> Self {
        self.meta = Some(meta.into());
        self
    }

    /// Set the icon glyph.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the image glyph.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Set the active-status flag.
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Get the raw attribute named by `field`.
    pub fn field(&self, field: ViewField) -> Option<&str> {
        match field {
            ViewField::Value => Some(self.value.as_str()),
            ViewField::Label => self.label.as_deref(),
            ViewField::Meta => self.meta.as_deref(),
            ViewField::Image => self.image.as_deref(),
            ViewField::Icon => self.icon.as_deref(),
        }
    }

    /// Derive the compact secondary text for the attribute named by `field`.
    ///
    /// Multi-word values are cut down to their first whitespace-separated
    /// word; single-word values pass through unchanged.
    pub fn secondary_text(&self, field: ViewField) -> Option<&str> {
        let raw = self.field(field)?;
        let mut words = raw.split_whitespace();
        let first = words.next()?;
        Some(first)
    }
}

/// Why a sequence of options was rejected at widget construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// An option at `index` has an empty identity value.
    #[error("option at index {index} has no value")]
    MissingValue { index: usize },
    /// Two options share the identity value `value`.
    #[error("duplicate option value {value:?}")]
    DuplicateValue { value: String },
}

/// Reject option sequences whose identity keys would make selection
/// membership ambiguous.
pub fn validate_options(options: &[SelectOption]) -> Result<(), OptionsError> {
    let mut seen = std::collections::HashSet::new();
    for (index, option) in options.iter().enumerate() {
        if option.value.is_empty() {
            return Err(OptionsError::MissingValue { index });
        }
        if !seen.insert(option.value.as_str()) {
            return Err(OptionsError::DuplicateValue {
                value: option.value.clone(),
            });
        }
    }
    Ok(())
}
