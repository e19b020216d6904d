//! Home screen: the map canvas with category-colored markers, the floating
//! search/filter hint bar, the offline banner, and the status footer.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::Canvas;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::catalog::{format_distance, Restroom};
use crate::geo::{self, Coordinate};
use crate::query::{self, distance_from_user};
use crate::state::{AppState, LocationPermission};
use crate::ui::theme::{marker_color, Theme};

/// Meters per degree of latitude; longitude is corrected by cos(lat).
const METERS_PER_DEGREE: f64 = 111_320.0;

pub struct MapView<'a> {
    pub state: &'a AppState,
    pub markers: &'a [&'a Restroom],
    pub cursor: usize,
    pub locating: bool,
    pub span_meters: f64,
}

pub fn draw(frame: &mut Frame<'_>, area: Rect, view: &MapView<'_>, theme: &Theme) {
    let offline_rows = u16::from(view.state.is_offline);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(offline_rows),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    draw_top_bar(frame, chunks[0], view, theme);
    if view.state.is_offline {
        frame.render_widget(
            Paragraph::new(Line::styled(
                " ⚠ You're offline — showing bundled results",
                Style::default().fg(theme.warning),
            )),
            chunks[1],
        );
    }
    draw_canvas(frame, chunks[2], view, theme);
    draw_footer(frame, chunks[3], view, theme);
}

fn draw_top_bar(frame: &mut Frame<'_>, area: Rect, view: &MapView<'_>, theme: &Theme) {
    let filter_badge = if query::filters_active(&view.state.active_filters) {
        Span::styled("[f]ilters ●", Style::default().fg(theme.primary))
    } else {
        Span::styled("[f]ilters", Style::default().fg(theme.muted))
    };
    let line = Line::from(vec![
        Span::styled(
            " Banyo ",
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" [s]earch restrooms…  ", Style::default().fg(theme.muted)),
        filter_badge,
        Span::styled("  [m]enu  [l]ocate", Style::default().fg(theme.muted)),
    ]);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(theme.panel_bg)), area);
}

fn draw_canvas(frame: &mut Frame<'_>, area: Rect, view: &MapView<'_>, theme: &Theme) {
    let center: Coordinate = view.state.user_location.unwrap_or(geo::DEFAULT_CENTER);
    let d_lat = view.span_meters / METERS_PER_DEGREE;
    let d_lng = view.span_meters / (METERS_PER_DEGREE * center.lat.to_radians().cos());

    let markers: Vec<(f64, f64, Line<'static>)> = view
        .markers
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let selected = view.state.selected_restroom == Some(r.id);
            let color = marker_color(query::marker_category(r));
            let mut style = Style::default().fg(color);
            if i == view.cursor {
                style = style.add_modifier(Modifier::BOLD);
            }
            let glyph = if selected { "◉" } else { "●" };
            let text = if i == view.cursor {
                format!("{glyph} {}", r.name)
            } else {
                glyph.to_string()
            };
            (r.position.lng, r.position.lat, Line::styled(text, style))
        })
        .collect();

    let user_fix = view.state.user_location;
    let user_style = Style::default().fg(theme.primary).add_modifier(Modifier::BOLD);

    let canvas = Canvas::default()
        .block(Block::default().style(Style::default().bg(theme.bg)))
        .x_bounds([center.lng - d_lng, center.lng + d_lng])
        .y_bounds([center.lat - d_lat, center.lat + d_lat])
        .paint(move |ctx| {
            for (x, y, line) in markers.clone() {
                ctx.print(x, y, line);
            }
            if let Some(fix) = user_fix {
                ctx.print(fix.lng, fix.lat, Line::styled("⊙", user_style));
            }
        });
    frame.render_widget(canvas, area);
}

fn draw_footer(frame: &mut Frame<'_>, area: Rect, view: &MapView<'_>, theme: &Theme) {
    let location_note = if view.locating {
        Span::styled("locating…", Style::default().fg(theme.accent))
    } else {
        match view.state.location_permission {
            LocationPermission::Granted => Span::styled("gps fix", Style::default().fg(theme.success)),
            LocationPermission::Denied => {
                Span::styled("location off", Style::default().fg(theme.muted))
            }
            LocationPermission::Unknown => Span::styled("", Style::default()),
        }
    };

    let cursor_note = view
        .markers
        .get(view.cursor)
        .map(|r| {
            format!(
                "  ▸ {} · {}",
                r.name,
                format_distance(distance_from_user(view.state, r))
            )
        })
        .unwrap_or_default();

    let line = Line::from(vec![
        Span::styled(
            format!(" {} nearby", view.markers.len()),
            Style::default().fg(theme.text),
        ),
        Span::styled(cursor_note, Style::default().fg(theme.muted)),
        Span::raw("  "),
        location_note,
        Span::styled(
            "  ↑↓ browse · Enter open · b save · q quit",
            Style::default().fg(theme.muted),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(theme.panel_bg)), area);
}
