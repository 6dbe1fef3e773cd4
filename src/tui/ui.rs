//! Presentation layer: pure rendering from [`AppState`], no logic of its own.
//!
//! What shows where is entirely derived from state: the dropdown only while
//! candidates exist and nothing is selected, the spinner only while loading,
//! the recommendation panel only for a settled non-empty result.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{AppState, Phase};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Colors for one theme
struct Palette {
    bg: Color,
    fg: Color,
    dim: Color,
    accent: Color,
    highlight_bg: Color,
    highlight_fg: Color,
}

fn palette(dark_mode: bool) -> Palette {
    if dark_mode {
        Palette {
            bg: Color::Black,
            fg: Color::White,
            dim: Color::DarkGray,
            accent: Color::Cyan,
            highlight_bg: Color::DarkGray,
            highlight_fg: Color::White,
        }
    } else {
        Palette {
            bg: Color::White,
            fg: Color::Black,
            dim: Color::Gray,
            accent: Color::Blue,
            highlight_bg: Color::LightBlue,
            highlight_fg: Color::Black,
        }
    }
}

pub fn draw(frame: &mut Frame, app: &AppState) {
    let p = palette(app.dark_mode);

    frame.render_widget(
        Block::default().style(Style::default().bg(p.bg).fg(p.fg)),
        frame.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Search box
            Constraint::Min(4),    // Dropdown / spinner / recommendations
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    draw_header(frame, app, &p, chunks[0]);
    draw_search_box(frame, app, &p, chunks[1]);
    draw_body(frame, app, &p, chunks[2]);
    draw_footer(frame, &p, chunks[3]);
}

fn draw_header(frame: &mut Frame, app: &AppState, p: &Palette, area: Rect) {
    let theme_label = if app.dark_mode { "dark" } else { "light" };
    let header = Line::from(vec![
        Span::styled(
            " Cinescout",
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" — movie recommendations", Style::default().fg(p.dim)),
        Span::styled(format!("  [{theme_label}]"), Style::default().fg(p.dim)),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

fn draw_search_box(frame: &mut Frame, app: &AppState, p: &Palette, area: Rect) {
    let input = Paragraph::new(app.query.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.dim))
            .title(" Search for a movie ")
            .title_style(Style::default().fg(p.fg)),
    );
    frame.render_widget(input, area);

    // Keep the terminal cursor at the end of the query text
    let x = area.x + 1 + app.query.chars().count() as u16;
    frame.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
}

fn draw_body(frame: &mut Frame, app: &AppState, p: &Palette, area: Rect) {
    if app.loading {
        draw_spinner(frame, app, p, area);
    } else if app.dropdown_visible() {
        draw_dropdown(frame, app, p, area);
    } else if app.panel_visible() {
        draw_recommendations(frame, app, p, area);
    } else if app.phase() == Phase::Idle {
        let hint = Paragraph::new(Line::from(Span::styled(
            "Type to search for a movie.",
            Style::default().fg(p.dim),
        )));
        frame.render_widget(hint, area);
    }
}

fn draw_spinner(frame: &mut Frame, app: &AppState, p: &Palette, area: Rect) {
    let glyph = SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()];
    let line = Line::from(vec![
        Span::styled(glyph, Style::default().fg(p.accent)),
        Span::styled(" Fetching recommendations...", Style::default().fg(p.dim)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_dropdown(frame: &mut Frame, app: &AppState, p: &Palette, area: Rect) {
    let items: Vec<ListItem> = app
        .candidates
        .iter()
        .map(|movie| ListItem::new(movie.title.as_str()))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(p.dim)),
        )
        .highlight_style(
            Style::default()
                .bg(p.highlight_bg)
                .fg(p.highlight_fg)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ratatui::widgets::ListState::default().with_selected(Some(app.cursor));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_recommendations(frame: &mut Frame, app: &AppState, p: &Palette, area: Rect) {
    let Some(selected) = &app.selected else {
        return;
    };

    let items: Vec<ListItem> = app
        .recommendations
        .iter()
        .map(|movie| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    movie.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    movie.genre_list().join(", "),
                    Style::default().fg(p.dim),
                )),
            ])
        })
        .collect();

    let panel = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.accent))
            .title(format!(" Movies similar to \"{}\" ", selected.title))
            .title_style(Style::default().fg(p.fg).add_modifier(Modifier::BOLD)),
    );
    frame.render_widget(panel, area);
}

fn draw_footer(frame: &mut Frame, p: &Palette, area: Rect) {
    let hints = Line::from(Span::styled(
        " ↑/↓ move · Enter select · Ctrl+U clear · Ctrl+T theme · Esc quit",
        Style::default().fg(p.dim),
    ));
    frame.render_widget(Paragraph::new(hints), area);
}
