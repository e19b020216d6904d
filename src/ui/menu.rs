//! Slide-in navigation menu. Every entry is a full-screen destination;
//! picking one dispatches `SetScreen`, which also closes this menu.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::state::{AppState, Screen};
use crate::ui::theme::Theme;

pub const ENTRIES: [(Screen, &str); 8] = [
    (Screen::Add, "Add Restroom"),
    (Screen::Report, "Report a Problem"),
    (Screen::Profile, "Profile"),
    (Screen::Settings, "Settings"),
    (Screen::Help, "Help & Support"),
    (Screen::Feedback, "Send Feedback"),
    (Screen::Privacy, "Privacy Policy"),
    (Screen::Terms, "Terms of Service"),
];

pub fn draw(frame: &mut Frame<'_>, area: Rect, state: &AppState, cursor: usize, theme: &Theme) {
    let width = area.width.min(30);
    let panel = Rect {
        x: area.x,
        y: area.y,
        width,
        height: area.height,
    };
    frame.render_widget(Clear, panel);

    let block = Block::default()
        .title(" Menu ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.panel_bg));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let mut lines = Vec::new();
    match &state.user {
        Some(user) => {
            lines.push(Line::styled(
                format!("  {}", user.display_name),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ));
            lines.push(Line::styled(
                format!("  {}", user.email),
                Style::default().fg(theme.muted),
            ));
        }
        None => {
            lines.push(Line::styled(
                "  Not signed in",
                Style::default().fg(theme.muted),
            ));
        }
    }
    lines.push(Line::default());

    for (i, (_, label)) in ENTRIES.iter().enumerate() {
        let style = if i == cursor {
            Style::default().bg(theme.highlight_bg).fg(theme.text)
        } else {
            Style::default().fg(theme.text)
        };
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(*label, style),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::styled(
        "  ↑↓ pick · Enter open",
        Style::default().fg(theme.muted),
    ));
    lines.push(Line::styled("  Esc close", Style::default().fg(theme.muted)));
    frame.render_widget(Paragraph::new(lines), inner);
}
