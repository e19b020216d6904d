//! Bottom-sheet filter editor. Rows map one-to-one onto the fields of
//! [`ActiveFilters`]; enum rows cycle through their fixed option sets.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::query::filters_active;
use crate::state::{ActiveFilters, FilterPatch, RADIUS_OPTIONS, RATING_OPTIONS};
use crate::ui::theme::Theme;

/// Sheet rows, top to bottom.
pub const ROWS: usize = 7;

const ROW_RADIUS: usize = 0;
const ROW_RATING: usize = 1;

/// Build the patch a left/right key produces on the given row, or a toggle
/// patch for a space/enter on a boolean row. Returns `None` when the row has
/// nothing to change (cycling past the end clamps).
pub fn patch_for(row: usize, forward: bool, filters: &ActiveFilters) -> Option<FilterPatch> {
    match row {
        ROW_RADIUS => {
            let i = RADIUS_OPTIONS.iter().position(|r| *r == filters.radius)?;
            let next = if forward {
                (i + 1).min(RADIUS_OPTIONS.len() - 1)
            } else {
                i.saturating_sub(1)
            };
            (next != i).then(|| FilterPatch {
                radius: Some(RADIUS_OPTIONS[next]),
                ..FilterPatch::default()
            })
        }
        ROW_RATING => {
            let i = RATING_OPTIONS.iter().position(|r| *r == filters.min_rating)?;
            let next = if forward {
                (i + 1).min(RATING_OPTIONS.len() - 1)
            } else {
                i.saturating_sub(1)
            };
            (next != i).then(|| FilterPatch {
                min_rating: Some(RATING_OPTIONS[next]),
                ..FilterPatch::default()
            })
        }
        2 => Some(FilterPatch {
            open_now: Some(!filters.open_now),
            ..FilterPatch::default()
        }),
        3 => Some(FilterPatch {
            wheelchair: Some(!filters.wheelchair),
            ..FilterPatch::default()
        }),
        4 => Some(FilterPatch {
            gender_neutral: Some(!filters.gender_neutral),
            ..FilterPatch::default()
        }),
        5 => Some(FilterPatch {
            family_room: Some(!filters.family_room),
            ..FilterPatch::default()
        }),
        6 => Some(FilterPatch {
            baby_changing: Some(!filters.baby_changing),
            ..FilterPatch::default()
        }),
        _ => None,
    }
}

pub fn draw(frame: &mut Frame<'_>, area: Rect, filters: &ActiveFilters, cursor: usize, theme: &Theme) {
    let height = 14.min(area.height);
    let sheet = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(height),
        width: area.width,
        height,
    };
    frame.render_widget(Clear, sheet);

    let title = if filters_active(filters) {
        " Filters ● "
    } else {
        " Filters "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.panel_bg));
    let inner = block.inner(sheet);
    frame.render_widget(block, sheet);

    let radius_label = |r: u32| {
        if r < 1000 {
            format!("{r}m")
        } else {
            format!("{}km", r / 1000)
        }
    };
    let rating_label = |m: f32| {
        if m == 0.0 {
            "Any".to_string()
        } else {
            format!("{m}★+")
        }
    };

    let mut lines = vec![
        option_row(
            "Distance",
            &RADIUS_OPTIONS.map(radius_label),
            RADIUS_OPTIONS.iter().position(|r| *r == filters.radius),
            cursor == ROW_RADIUS,
            theme,
        ),
        option_row(
            "Min rating",
            &RATING_OPTIONS.map(rating_label),
            RATING_OPTIONS.iter().position(|r| *r == filters.min_rating),
            cursor == ROW_RATING,
            theme,
        ),
        Line::default(),
    ];
    let toggles = [
        ("Open Now", filters.open_now),
        ("Wheelchair Accessible", filters.wheelchair),
        ("Gender Neutral", filters.gender_neutral),
        ("Family Room", filters.family_room),
        ("Baby Changing", filters.baby_changing),
    ];
    for (i, (label, on)) in toggles.iter().enumerate() {
        let focused = cursor == 2 + i;
        let marker = if focused { "> " } else { "  " };
        let check = if *on { "[x]" } else { "[ ]" };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(theme.primary)),
            Span::styled(
                check,
                Style::default().fg(if *on { theme.primary } else { theme.muted }),
            ),
            Span::styled(format!(" {label}"), Style::default().fg(theme.text)),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::styled(
        "↑↓ row · ←→ adjust · space toggle · r reset · Esc close",
        Style::default().fg(theme.muted),
    ));
    frame.render_widget(Paragraph::new(lines), inner);
}

fn option_row<'a>(
    label: &'a str,
    options: &[String],
    selected: Option<usize>,
    focused: bool,
    theme: &Theme,
) -> Line<'a> {
    let marker = if focused { "> " } else { "  " };
    let mut spans = vec![
        Span::styled(marker, Style::default().fg(theme.primary)),
        Span::styled(format!("{label}:  "), Style::default().fg(theme.muted)),
    ];
    for (i, option) in options.iter().enumerate() {
        let style = if selected == Some(i) {
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.text)
        };
        spans.push(Span::styled(option.clone(), style));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}
