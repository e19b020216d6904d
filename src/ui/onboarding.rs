//! Three-slide onboarding. Completion is one-way; the last slide offers the
//! location permission prompt.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::theme::Theme;

pub struct Slide {
    pub icon: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// The permission slide swaps "Next" for "Enable Location".
    pub asks_permission: bool,
}

pub const SLIDES: [Slide; 3] = [
    Slide {
        icon: "🚻",
        title: "Find Restrooms Anywhere",
        subtitle: "Discover clean, accessible restrooms near you — rated and reviewed by the community.",
        asks_permission: false,
    },
    Slide {
        icon: "⭐",
        title: "Rate & Share Your Experience",
        subtitle: "Help others by rating restrooms, reporting issues, and adding new locations.",
        asks_permission: false,
    },
    Slide {
        icon: "📍",
        title: "Enable Location for Best Results",
        subtitle: "Allow location access so we can show restrooms nearest to you. Your privacy is our priority.",
        asks_permission: true,
    },
];

pub fn draw(frame: &mut Frame<'_>, area: Rect, slide_index: usize, theme: &Theme) {
    frame.render_widget(Block::default().style(Style::default().bg(theme.bg)), area);

    let slide = &SLIDES[slide_index.min(SLIDES.len() - 1)];
    let dots: String = (0..SLIDES.len())
        .map(|i| if i == slide_index { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ");

    let action = if slide.asks_permission {
        "Enter  enable location & start   s  skip"
    } else {
        "Enter  next   s  skip"
    };

    let lines = vec![
        Line::default(),
        Line::default(),
        Line::styled(slide.icon, Style::default()).centered(),
        Line::default(),
        Line::styled(
            slide.title,
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )
        .centered(),
        Line::default(),
        Line::styled(slide.subtitle, Style::default().fg(theme.muted)).centered(),
        Line::default(),
        Line::default(),
        Line::styled(dots, Style::default().fg(theme.primary)).centered(),
        Line::default(),
        Line::styled(action, Style::default().fg(theme.muted)).centered(),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}
