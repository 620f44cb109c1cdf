//! Screen layout: a header plus a three-column grid of widget sections.

use latch::prelude::*;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::posts::ResourceState;

const CELL_HEIGHT: u16 = 13;
const COLUMNS: usize = 3;

pub fn draw(frame: &mut Frame, app: &App) {
    let [header, body] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(frame.area());

    frame.render_widget(
        Paragraph::new(vec![
            Line::styled(
                "Select Component Variants",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                "Tab to focus, Enter/Space to open, q to quit",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        header,
    );

    let cell_count = app.sections.len() + 1;
    let cells = grid(body, cell_count);
    let posts_present = app.posts_select.is_some();

    if let Some(cell) = cells.first() {
        draw_posts_cell(frame, *cell, app, posts_present && app.focus == 0);
    }

    let offset = usize::from(posts_present);
    for (index, section) in app.sections.iter().enumerate() {
        if let Some(cell) = cells.get(index + 1) {
            draw_section(
                frame,
                *cell,
                section.heading,
                &section.select,
                app.focus == index + offset,
            );
        }
    }
}

/// Split `area` into up to `count` fixed-height cells, three per row.
fn grid(area: Rect, count: usize) -> Vec<Rect> {
    let rows = count.div_ceil(COLUMNS);
    let row_areas = Layout::vertical(vec![Constraint::Length(CELL_HEIGHT); rows])
        .spacing(1)
        .split(area);

    let mut cells = Vec::with_capacity(count);
    for row_area in row_areas.iter() {
        let columns = Layout::horizontal(vec![Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
            .spacing(2)
            .split(*row_area);
        for column in columns.iter() {
            if cells.len() < count {
                cells.push(*column);
            }
        }
    }
    cells
}

fn draw_section(frame: &mut Frame, area: Rect, heading: &str, select: &Select, focused: bool) {
    let [head, body] = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
    frame.render_widget(
        Paragraph::new(Line::styled(
            heading.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        head,
    );
    select.render(frame, body, focused);
}

/// The posts-backed section: a placeholder until the fetch resolves, the
/// widget afterwards.
fn draw_posts_cell(frame: &mut Frame, area: Rect, app: &App, focused: bool) {
    let [head, body] = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
    frame.render_widget(
        Paragraph::new(Line::styled(
            "API Data",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        head,
    );

    if let Some(select) = &app.posts_select {
        select.render(frame, body, focused);
        return;
    }

    let placeholder = match app.posts.read() {
        Ok(guard) => match &*guard {
            ResourceState::Error(_) => {
                Line::styled("Error loading posts", Style::default().fg(Color::Red))
            }
            _ => Line::styled("Loading...", Style::default().fg(Color::DarkGray)),
        },
        Err(_) => Line::styled("Error loading posts", Style::default().fg(Color::Red)),
    };
    frame.render_widget(Paragraph::new(placeholder), body);
}
