//! Named color palette used by the renderer.

use ratatui::style::Color;

/// Colors the renderer resolves by role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Primary text.
    pub text: Color,
    /// Secondary text (meta, placeholder, indicator, hint).
    pub muted: Color,
    /// Dropdown background.
    pub surface: Color,
    /// Row under the keyboard cursor.
    pub cursor_bg: Color,
    /// Row currently selected.
    pub selected_bg: Color,
    /// Trigger border/highlight while open.
    pub accent: Color,
    /// Active-status dot.
    pub active: Color,
    /// Inactive-status dot.
    pub inactive: Color,
}

impl Palette {
    /// Default dark palette.
    pub fn dark() -> Self {
        Self {
            text: Color::Rgb(0xe6, 0xe6, 0xe6),
            muted: Color::Rgb(0x8a, 0x8f, 0x98),
            surface: Color::Rgb(0x1f, 0x22, 0x28),
            cursor_bg: Color::Rgb(0xa2, 0x77, 0xff),
            selected_bg: Color::Rgb(0x6e, 0x54, 0x94),
            accent: Color::Rgb(0xd6, 0xbb, 0xfb),
            active: Color::Rgb(0x17, 0xb2, 0x6a),
            inactive: Color::Rgb(0x66, 0x70, 0x85),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}
