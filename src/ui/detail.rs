//! Detail sheet for the selected restroom: collapsed summary at the bottom
//! of the map, or an expanded panel with hours, amenities, photos, and
//! reviews.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::catalog::{format_distance, Catalog, Restroom};
use crate::query::distance_from_user;
use crate::state::AppState;
use crate::ui::theme::Theme;

pub fn draw(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &AppState,
    catalog: &Catalog,
    theme: &Theme,
) {
    let Some(restroom) = state.selected_restroom.and_then(|id| catalog.get(id)) else {
        return;
    };

    let height = if state.detail_expanded {
        area.height.saturating_sub(2)
    } else {
        8.min(area.height)
    };
    let sheet = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(height),
        width: area.width,
        height,
    };
    frame.render_widget(Clear, sheet);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.panel_bg));
    let inner = block.inner(sheet);
    frame.render_widget(block, sheet);

    let mut lines = summary_lines(state, restroom, theme);
    if state.detail_expanded {
        lines.extend(expanded_lines(restroom, catalog, theme));
        lines.push(Line::default());
        lines.push(Line::styled(
            "e collapse · b save · r report · Esc close",
            Style::default().fg(theme.muted),
        ));
    } else {
        lines.push(Line::styled(
            "e expand · b save · r report · Esc close",
            Style::default().fg(theme.muted),
        ));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn summary_lines<'a>(state: &AppState, restroom: &'a Restroom, theme: &Theme) -> Vec<Line<'a>> {
    let saved = state.saved_restrooms.contains(&restroom.id);
    let open = if restroom.is_open {
        Span::styled("Open", Style::default().fg(theme.success))
    } else {
        Span::styled("Closed", Style::default().fg(theme.error))
    };

    let mut badges: Vec<&str> = Vec::new();
    if restroom.amenities.wheelchair {
        badges.push("Accessible");
    }
    if restroom.amenities.gender_neutral {
        badges.push("Gender Neutral");
    }
    if restroom.amenities.baby_changing {
        badges.push("Baby");
    }
    if restroom.amenities.family_room {
        badges.push("Family");
    }

    vec![
        Line::from(vec![
            Span::styled(
                restroom.name.as_str(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                if saved { "  ♥ saved" } else { "" },
                Style::default().fg(theme.accent),
            ),
        ]),
        Line::styled(restroom.address.as_str(), Style::default().fg(theme.muted)),
        Line::from(vec![
            Span::styled(
                format!("★ {:.1}", restroom.rating),
                Style::default().fg(theme.accent),
            ),
            Span::styled(
                format!(" ({} reviews) · ", restroom.review_count),
                Style::default().fg(theme.muted),
            ),
            Span::styled(
                format!(
                    "{} · {} · ",
                    restroom.category.label(),
                    format_distance(distance_from_user(state, restroom))
                ),
                Style::default().fg(theme.muted),
            ),
            open,
        ]),
        Line::styled(badges.join(" · "), Style::default().fg(theme.primary)),
    ]
}

fn expanded_lines<'a>(
    restroom: &'a Restroom,
    catalog: &'a Catalog,
    theme: &Theme,
) -> Vec<Line<'a>> {
    let mut lines = vec![
        Line::default(),
        Line::from(vec![
            Span::styled("Hours  ", Style::default().fg(theme.muted)),
            Span::styled(restroom.hours.as_str(), Style::default().fg(theme.text)),
        ]),
    ];

    if restroom.verified {
        lines.push(Line::styled(
            format!("✓ Verified · last checked {}", restroom.last_verified),
            Style::default().fg(theme.success),
        ));
    } else {
        lines.push(Line::styled(
            format!("Unverified · last checked {}", restroom.last_verified),
            Style::default().fg(theme.muted),
        ));
    }

    let amenity_rows = [
        ("Wheelchair", restroom.amenities.wheelchair),
        ("Gender neutral", restroom.amenities.gender_neutral),
        ("Baby changing", restroom.amenities.baby_changing),
        ("Family room", restroom.amenities.family_room),
        ("Bidet", restroom.amenities.bidet),
        ("Hand dryer", restroom.amenities.dryer),
    ];
    lines.push(Line::default());
    lines.push(Line::styled("Amenities", Style::default().fg(theme.muted)));
    for (label, present) in amenity_rows {
        let (mark, color) = if present {
            ("✓", theme.success)
        } else {
            ("✗", theme.muted)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {mark} "), Style::default().fg(color)),
            Span::styled(label, Style::default().fg(theme.text)),
        ]));
    }

    if !restroom.photos.is_empty() {
        lines.push(Line::default());
        lines.push(Line::styled(
            format!("Photos ({})", restroom.photos.len()),
            Style::default().fg(theme.muted),
        ));
        for photo in &restroom.photos {
            lines.push(Line::styled(
                format!("  ▣ {photo}"),
                Style::default().fg(theme.muted),
            ));
        }
    }

    let reviews = catalog.reviews_for(restroom.id);
    lines.push(Line::default());
    lines.push(Line::styled(
        format!("Reviews ({})", reviews.len()),
        Style::default().fg(theme.muted),
    ));
    if reviews.is_empty() {
        lines.push(Line::styled(
            "  No reviews yet.",
            Style::default().fg(theme.muted),
        ));
    }
    for review in reviews {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {} ", review.author),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{} · {}", "★".repeat(review.rating as usize), review.date),
                Style::default().fg(theme.accent),
            ),
        ]));
        lines.push(Line::styled(
            format!("    {}", review.text),
            Style::default().fg(theme.text),
        ));
        lines.push(Line::styled(
            format!("    {} found this helpful", review.helpful_count),
            Style::default().fg(theme.muted),
        ));
    }

    lines
}
