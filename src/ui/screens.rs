//! Full-screen views other than the map and the forms: profile, settings,
//! and the static informational screens.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::catalog::{format_distance, Catalog};
use crate::query::distance_from_user;
use crate::state::{AppState, LocationPermission, Screen};
use crate::ui::theme::Theme;

fn screen_frame(frame: &mut Frame<'_>, area: Rect, title: &str, theme: &Theme) -> Rect {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.panel_bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

pub fn draw_profile(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &AppState,
    catalog: &Catalog,
    cursor: usize,
    theme: &Theme,
) {
    let inner = screen_frame(frame, area, Screen::Profile.title(), theme);
    let mut lines = Vec::new();

    match &state.user {
        Some(user) => {
            lines.push(Line::styled(
                user.display_name.as_str(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ));
            lines.push(Line::styled(
                user.email.as_str(),
                Style::default().fg(theme.muted),
            ));
            lines.push(Line::styled(
                "o  sign out",
                Style::default().fg(theme.muted),
            ));
        }
        None => {
            lines.push(Line::styled(
                "You're browsing as a guest.",
                Style::default().fg(theme.text),
            ));
            lines.push(Line::styled(
                "i  sign in or create an account",
                Style::default().fg(theme.primary),
            ));
        }
    }

    lines.push(Line::default());
    lines.push(Line::styled(
        format!("SAVED RESTROOMS ({})", state.saved_restrooms.len()),
        Style::default().fg(theme.muted),
    ));

    if state.saved_restrooms.is_empty() {
        lines.push(Line::styled(
            "Nothing saved yet — press b on a restroom to save it.",
            Style::default().fg(theme.muted),
        ));
    }

    for (i, id) in state.saved_restrooms.iter().enumerate() {
        let Some(restroom) = catalog.get(*id) else {
            continue;
        };
        let style = if i == cursor {
            Style::default().bg(theme.highlight_bg).fg(theme.text)
        } else {
            Style::default().fg(theme.text)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("♥ {}", restroom.name), style),
            Span::styled(
                format!(
                    "  ★ {:.1} · {}",
                    restroom.rating,
                    format_distance(distance_from_user(state, restroom))
                ),
                Style::default().fg(theme.muted),
            ),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::styled(
        "↑↓ pick saved · Enter show on map · u unsave · Esc back",
        Style::default().fg(theme.muted),
    ));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

pub fn draw_settings(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let inner = screen_frame(frame, area, Screen::Settings.title(), theme);

    let permission = match state.location_permission {
        LocationPermission::Granted => "granted",
        LocationPermission::Denied => "denied",
        LocationPermission::Unknown => "not requested",
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                if state.dark_mode { "[x] " } else { "[ ] " },
                Style::default().fg(theme.primary),
            ),
            Span::styled("Dark mode", Style::default().fg(theme.text)),
            Span::styled("  (d to toggle)", Style::default().fg(theme.muted)),
        ]),
        Line::default(),
        Line::styled("ABOUT THIS DEVICE", Style::default().fg(theme.muted)),
        Line::styled(
            format!("Location permission: {permission}"),
            Style::default().fg(theme.text),
        ),
        Line::styled(
            format!(
                "Network: {}",
                if state.is_offline { "offline" } else { "online" }
            ),
            Style::default().fg(theme.text),
        ),
        Line::styled(
            format!("Saved restrooms: {}", state.saved_restrooms.len()),
            Style::default().fg(theme.text),
        ),
        Line::styled(
            format!("Recent searches: {}", state.recent_searches.len()),
            Style::default().fg(theme.text),
        ),
    ];

    if let Some(user) = &state.user {
        lines.push(Line::default());
        lines.push(Line::styled(
            format!("Signed in as {} · o to sign out", user.email),
            Style::default().fg(theme.text),
        ));
    }

    lines.push(Line::default());
    lines.push(Line::styled("Esc  back", Style::default().fg(theme.muted)));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

pub fn draw_static(
    frame: &mut Frame<'_>,
    area: Rect,
    screen: Screen,
    scroll: u16,
    theme: &Theme,
) {
    let inner = screen_frame(frame, area, screen.title(), theme);
    let body = static_body(screen);

    let mut lines: Vec<Line<'_>> = body
        .iter()
        .map(|text| Line::styled(*text, Style::default().fg(theme.text)))
        .collect();
    lines.push(Line::default());
    lines.push(Line::styled(
        "↑↓ scroll · Esc back",
        Style::default().fg(theme.muted),
    ));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        inner,
    );
}

fn static_body(screen: Screen) -> &'static [&'static str] {
    match screen {
        Screen::Privacy => &[
            "Your privacy matters.",
            "",
            "Banyo stores your preferences — theme, saved restrooms, recent",
            "searches, and an optional profile — on this device only. Nothing",
            "leaves it.",
            "",
            "Location access is used once per request to sort and filter",
            "nearby restrooms. Your position is never stored durably and",
            "never shared.",
            "",
            "Restroom listings are community data bundled with the app.",
        ],
        Screen::Help => &[
            "Getting around",
            "",
            "  s       search restrooms by name, place, or amenity",
            "  f       filter by distance, rating, and amenities",
            "  l       use your location to sort results",
            "  b       save a restroom for later",
            "  m       open the menu",
            "",
            "Markers",
            "",
            "  blue    wheelchair accessible",
            "  violet  gender neutral",
            "  amber   family room",
            "  teal    standard listing",
            "",
            "Something wrong with a listing? Use Report a Problem in the",
            "menu — reports are reviewed before listings change.",
        ],
        Screen::Terms => &[
            "By using Banyo you agree to the house rules:",
            "",
            "1. Listings are community-contributed and provided as-is,",
            "   without warranty of cleanliness, availability, or soap.",
            "2. Submitted locations, reports, and reviews may be edited or",
            "   removed by moderators.",
            "3. Don't submit private facilities without permission from the",
            "   owner.",
            "4. Be kind in reviews. Attack the restroom, not the people.",
        ],
        _ => &[],
    }
}
