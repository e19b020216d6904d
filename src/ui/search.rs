//! Full-screen search overlay: live results while typing, recent and
//! suggested terms when the query is blank.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::catalog::{format_distance, Restroom, SEARCH_SUGGESTIONS};
use crate::query::distance_from_user;
use crate::state::AppState;
use crate::ui::theme::Theme;

pub struct SearchView<'a> {
    pub state: &'a AppState,
    pub results: &'a [&'a Restroom],
    pub cursor: usize,
}

/// Rows the cursor can land on while the query is blank: recents first, then
/// suggestions.
pub fn blank_query_terms(state: &AppState) -> Vec<&str> {
    state
        .recent_searches
        .iter()
        .map(String::as_str)
        .chain(SEARCH_SUGGESTIONS.iter().copied())
        .collect()
}

pub fn draw(frame: &mut Frame<'_>, area: Rect, view: &SearchView<'_>, theme: &Theme) {
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let input = Paragraph::new(Line::from(vec![
        Span::styled("🔍 ", Style::default().fg(theme.muted)),
        Span::styled(
            view.state.search_query.as_str(),
            Style::default().fg(theme.text),
        ),
        Span::styled("▏", Style::default().fg(theme.primary)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" Search restrooms, places… "),
    );
    frame.render_widget(input, chunks[0]);

    if view.state.search_query.trim().is_empty() {
        draw_blank_query(frame, chunks[1], view, theme);
    } else if view.results.is_empty() {
        frame.render_widget(
            Paragraph::new(vec![
                Line::default(),
                Line::styled("  No results found", Style::default().fg(theme.text)),
                Line::styled(
                    "  Try a different search term",
                    Style::default().fg(theme.muted),
                ),
            ]),
            chunks[1],
        );
    } else {
        draw_results(frame, chunks[1], view, theme);
    }
}

fn draw_blank_query(frame: &mut Frame<'_>, area: Rect, view: &SearchView<'_>, theme: &Theme) {
    let recents = view.state.recent_searches.len();
    let mut lines = Vec::new();

    if recents > 0 {
        lines.push(Line::styled("  RECENT", Style::default().fg(theme.muted)));
        for (i, term) in view.state.recent_searches.iter().enumerate() {
            lines.push(term_line(term, i == view.cursor, "⏱", theme));
        }
        lines.push(Line::default());
    }

    lines.push(Line::styled("  SUGGESTIONS", Style::default().fg(theme.muted)));
    for (i, term) in SEARCH_SUGGESTIONS.iter().enumerate() {
        lines.push(term_line(term, recents + i == view.cursor, "✦", theme));
    }

    lines.push(Line::default());
    lines.push(Line::styled(
        "  type to search · ↑↓ pick · Enter use · Esc close",
        Style::default().fg(theme.muted),
    ));
    frame.render_widget(Paragraph::new(lines), area);
}

fn term_line<'a>(term: &'a str, focused: bool, icon: &'a str, theme: &Theme) -> Line<'a> {
    let style = if focused {
        Style::default().bg(theme.highlight_bg).fg(theme.text)
    } else {
        Style::default().fg(theme.text)
    };
    Line::from(vec![
        Span::styled(format!("  {icon} "), Style::default().fg(theme.muted)),
        Span::styled(term, style),
    ])
}

fn draw_results(frame: &mut Frame<'_>, area: Rect, view: &SearchView<'_>, theme: &Theme) {
    let mut lines = vec![Line::styled(
        format!(
            "  {} result{}",
            view.results.len(),
            if view.results.len() == 1 { "" } else { "s" }
        ),
        Style::default().fg(theme.muted),
    )];

    for (i, r) in view.results.iter().enumerate() {
        let focused = i == view.cursor;
        let name_style = if focused {
            Style::default()
                .bg(theme.highlight_bg)
                .fg(theme.text)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        let open = if r.is_open {
            Span::styled("Open", Style::default().fg(theme.success))
        } else {
            Span::styled("Closed", Style::default().fg(theme.error))
        };
        lines.push(Line::from(vec![Span::styled(
            format!("  {}", r.name),
            name_style,
        )]));
        lines.push(Line::from(vec![
            Span::styled(
                format!(
                    "    ★ {:.1} · {} · ",
                    r.rating,
                    format_distance(distance_from_user(view.state, r))
                ),
                Style::default().fg(theme.muted),
            ),
            open,
            Span::styled(format!(" · {}", r.address), Style::default().fg(theme.muted)),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::styled(
        "  ↑↓ pick · Enter open · Esc close",
        Style::default().fg(theme.muted),
    ));
    frame.render_widget(Paragraph::new(lines), area);
}
