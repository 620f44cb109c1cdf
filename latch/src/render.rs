//! Rendering for the Select widget.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::{SelectConfig, ViewField};
use crate::option::SelectOption;
use crate::state::Select;
use crate::text::{display_width, truncate_to_width};
use crate::variant::Variant;

/// Most dropdown rows shown before the list is cut off.
const MAX_VISIBLE_ROWS: u16 = 8;

/// Chips shown in the closed multi-select summary.
pub const CLOSED_CHIP_LIMIT: usize = 2;

/// Chips shown while the multi-select dropdown is open.
const OPEN_CHIP_LIMIT: usize = 1;

/// Derive the chip texts for the multi-select summary: the leading chips
/// plus an overflow marker covering the rest.
///
/// Pure so the summary is testable without a terminal.
pub fn chip_summary(selected: &[SelectOption], config: &SelectConfig, open: bool) -> Vec<String> {
    let limit = if open { OPEN_CHIP_LIMIT } else { CLOSED_CHIP_LIMIT };
    let mut chips: Vec<String> = selected
        .iter()
        .take(limit)
        .map(|option| chip_text(option, config))
        .collect();
    if selected.len() > CLOSED_CHIP_LIMIT {
        chips.push(format!("+{}", selected.len() - CLOSED_CHIP_LIMIT));
    }
    chips
}

fn chip_text(option: &SelectOption, config: &SelectConfig) -> String {
    let image = option.image.as_deref();
    // Icon/image view fields render the glyph alone; everything else gets
    // the compact secondary text next to it.
    let text = match config.view_field {
        ViewField::Icon | ViewField::Image => None,
        field => option.secondary_text(field),
    };
    match (image, text) {
        (Some(glyph), Some(text)) => format!("{glyph} {text}"),
        (Some(glyph), None) => glyph.to_string(),
        (None, Some(text)) => text.to_string(),
        (None, None) => option.value.clone(),
    }
}

impl Select {
    /// Render the widget into `area`.
    ///
    /// Draws the optional title, the one-line trigger, and either the open
    /// dropdown or the revealed hint line. Caches the trigger/dropdown
    /// rects for the host's hit-testing.
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let config = self.config().clone();
        let width = config.width.min(area.width);
        if width == 0 || area.height == 0 {
            return;
        }

        let mut y = area.y;

        if let Some(title) = &config.title
            && y < area.bottom()
        {
            let style = Style::default().fg(config.palette.text);
            frame.render_widget(
                Paragraph::new(Line::styled(title.clone(), style)),
                Rect::new(area.x, y, width, 1),
            );
            y += 1;
        }

        let trigger = Rect::new(area.x, y, width, 1);
        if y >= area.bottom() {
            return;
        }
        self.render_trigger(frame, trigger, focused, &config);
        y += 1;

        let mut overlay = None;
        if self.is_open() {
            let rows = (self.visible_len() as u16)
                .min(MAX_VISIBLE_ROWS)
                .min(area.bottom().saturating_sub(y));
            if rows > 0 {
                let rect = Rect::new(area.x, y, width, rows);
                self.render_overlay(frame, rect, &config);
                overlay = Some(rect);
            }
        } else if self.hint_visible()
            && let Some(hint) = &config.hint
            && y < area.bottom()
        {
            let style = Style::default().fg(config.palette.muted);
            frame.render_widget(
                Paragraph::new(Line::styled(hint.clone(), style)),
                Rect::new(area.x, y, width, 1),
            );
        }

        self.set_anchor_rects(trigger, overlay);
        self.clear_dirty();
    }

    /// Render the one-line closed-control appearance.
    fn render_trigger(&self, frame: &mut Frame, area: Rect, focused: bool, config: &SelectConfig) {
        let palette = &config.palette;
        let mut base = Style::default().fg(palette.text);
        if focused {
            base = base.bg(ratatui::style::Color::Rgb(80, 80, 100));
        }
        if config.disabled {
            base = base.add_modifier(Modifier::DIM);
        }
        let muted = base.fg(palette.muted);

        let selected = self.selected();
        let mut spans = match config.variant {
            Variant::MultiSearch => self.chip_spans(&selected, config, base),
            _ => selected
                .first()
                .map(|option| summary_spans(option, config, base, muted))
                .unwrap_or_default(),
        };

        if self.is_search_active() {
            if !spans.is_empty() {
                spans.push(Span::styled(" ", base));
            }
            spans.push(Span::styled(self.search_text(), base));
            spans.push(Span::styled("▌", base.fg(palette.accent)));
        } else if selected.is_empty() {
            spans.push(Span::styled(
                config.effective_placeholder().to_string(),
                muted.add_modifier(Modifier::DIM),
            ));
        }

        // Reserve two columns for the indicator and its gap.
        let budget = area.width.saturating_sub(2) as usize;
        let mut line_spans = fit_spans(spans, budget, base);
        let indicator_style = if self.is_open() {
            base.fg(palette.accent)
        } else {
            muted.add_modifier(Modifier::DIM)
        };
        line_spans.push(Span::styled(" ", base));
        line_spans.push(Span::styled(
            if self.is_open() { "▲" } else { "▼" },
            indicator_style,
        ));

        frame.render_widget(Paragraph::new(Line::from(line_spans)), area);
    }

    /// Chip list for the multi-select trigger.
    fn chip_spans(
        &self,
        selected: &[SelectOption],
        config: &SelectConfig,
        base: Style,
    ) -> Vec<Span<'static>> {
        let chip_style = base.bg(config.palette.surface);
        let mut spans = Vec::new();
        for chip in chip_summary(selected, config, self.is_open()) {
            if !spans.is_empty() {
                spans.push(Span::styled(" ", base));
            }
            spans.push(Span::styled(format!(" {chip} "), chip_style));
        }
        spans
    }

    /// Render the dropdown rows.
    fn render_overlay(&self, frame: &mut Frame, area: Rect, config: &SelectConfig) {
        let palette = &config.palette;
        let cursor = self.cursor();
        let options = self.visible_options();

        let mut lines = Vec::with_capacity(area.height as usize);
        for (row, option) in options.iter().take(area.height as usize).enumerate() {
            let is_cursor = row == cursor;
            let is_selected = self.is_selected(&option.value);

            let mut style = Style::default().fg(palette.text).bg(palette.surface);
            if is_cursor {
                style = style.bg(palette.cursor_bg).fg(palette.surface);
            } else if is_selected {
                style = style.bg(palette.selected_bg).fg(palette.text);
            }

            lines.push(row_line(
                option,
                config,
                style,
                is_selected,
                area.width as usize,
            ));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}

/// The closed-control summary for single-select variants.
fn summary_spans(
    option: &SelectOption,
    config: &SelectConfig,
    base: Style,
    muted: Style,
) -> Vec<Span<'static>> {
    let palette = &config.palette;
    let mut spans = Vec::new();

    match config.variant {
        Variant::Icon => {
            if let Some(icon) = &option.icon {
                spans.push(Span::styled(format!("{icon} "), base));
            }
        }
        Variant::Image => {
            if let Some(image) = &option.image {
                spans.push(Span::styled(format!("{image} "), base));
            }
        }
        Variant::Active => {
            let dot_style = if option.is_active {
                base.fg(palette.active)
            } else {
                base.fg(palette.inactive)
            };
            spans.push(Span::styled("● ", dot_style));
        }
        Variant::Plain | Variant::Search | Variant::MultiSearch => {}
    }

    if let Some(label) = &option.label {
        spans.push(Span::styled(label.clone(), base.add_modifier(Modifier::BOLD)));
    }

    match secondary_display(option, config) {
        Some(Secondary::Glyph(glyph)) => {
            spans.push(Span::styled(format!(" {glyph}"), base));
        }
        Some(Secondary::Text(text)) => {
            spans.push(Span::styled(format!(" {text}"), muted));
        }
        None => {}
    }

    spans
}

/// One dropdown row.
fn row_line(
    option: &SelectOption,
    config: &SelectConfig,
    style: Style,
    is_selected: bool,
    width: usize,
) -> Line<'static> {
    let mut spans = Vec::new();

    match config.variant {
        Variant::Active => {
            let dot = if option.is_active {
                style.fg(config.palette.active)
            } else {
                style.fg(config.palette.inactive)
            };
            spans.push(Span::styled("● ", dot));
        }
        Variant::Icon => {
            if let Some(icon) = &option.icon {
                spans.push(Span::styled(format!("{icon} "), style));
            }
        }
        Variant::Image | Variant::MultiSearch => {
            if let Some(image) = &option.image {
                spans.push(Span::styled(format!("{image} "), style));
            }
        }
        Variant::Plain | Variant::Search => {}
    }

    if let Some(label) = &option.label {
        spans.push(Span::styled(label.clone(), style));
    }
    if option.meta.is_some()
        && let Some(text) = option.secondary_text(config.view_field)
    {
        spans.push(Span::styled(
            format!(" {text}"),
            style.add_modifier(Modifier::DIM),
        ));
    }

    // Right-aligned marker on selected rows.
    let marker_cols = if is_selected {
        display_width(&config.selected_marker) + 1
    } else {
        0
    };
    let mut spans = fit_spans(spans, width.saturating_sub(marker_cols + 1), style);
    if is_selected {
        spans.push(Span::styled(
            format!(" {}", config.selected_marker),
            style,
        ));
    }

    Line::from(spans)
}

/// Secondary trigger content: a raw glyph for icon/image view fields, the
/// compact first-word text otherwise.
enum Secondary {
    Glyph(String),
    Text(String),
}

fn secondary_display(option: &SelectOption, config: &SelectConfig) -> Option<Secondary> {
    match config.view_field {
        ViewField::Icon | ViewField::Image
            if matches!(config.variant, Variant::Active | Variant::Search) =>
        {
            option
                .field(config.view_field)
                .map(|glyph| Secondary::Glyph(glyph.to_string()))
        }
        field => option
            .secondary_text(field)
            .map(|text| Secondary::Text(text.to_string())),
    }
}

/// Cut a span list down to `budget` columns (ellipsizing the overflowing
/// span) and pad the remainder with spaces so backgrounds fill the line.
fn fit_spans(spans: Vec<Span<'static>>, budget: usize, pad_style: Style) -> Vec<Span<'static>> {
    let mut out = Vec::with_capacity(spans.len() + 1);
    let mut used = 0;

    for span in spans {
        let w = display_width(&span.content);
        if used + w <= budget {
            used += w;
            out.push(span);
            continue;
        }
        let remaining = budget - used;
        if remaining > 0 {
            let cut = truncate_to_width(&span.content, remaining);
            used += display_width(&cut);
            out.push(Span::styled(cut, span.style));
        }
        break;
    }

    if used < budget {
        out.push(Span::styled(" ".repeat(budget - used), pad_style));
    }
    out
}
