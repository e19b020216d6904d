//! Per-form scratch state and rendering for the add / report / feedback
//! screens and the sign-in modal. Scratch state lives here, outside the
//! state container: it is screen-local by design and resets when the screen
//! is reopened.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::auth::{AuthError, Credentials};
use crate::catalog::Category;
use crate::ui::theme::Theme;

/// Submission lifecycle shared by the three mock-submit forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitPhase {
    Editing,
    Submitting,
    /// Holds the generated reference id shown on the success panel.
    Submitted(String),
}

impl Default for SubmitPhase {
    fn default() -> Self {
        SubmitPhase::Editing
    }
}

/// Issue choices on the report screen, in display order.
pub const REPORT_ISSUES: [&str; 6] = [
    "Cleanliness Issue",
    "Broken / Out of Order",
    "Safety Concern",
    "Permanently Locked",
    "No Soap / Supplies",
    "Other Issue",
];

/// Feedback type choices, in display order.
pub const FEEDBACK_TYPES: [&str; 4] = [
    "Bug Report",
    "Feature Request",
    "Improvement",
    "Appreciation",
];

// -- add restroom ---------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct AddForm {
    pub name: String,
    pub address: String,
    pub category: usize,
    /// Wheelchair, gender neutral, baby changing, family room, bidet, dryer.
    pub amenities: [bool; 6],
    pub notes: String,
    pub focus: usize,
    pub phase: SubmitPhase,
    pub error: Option<&'static str>,
}

pub const ADD_AMENITY_LABELS: [&str; 6] = [
    "Wheelchair Accessible",
    "Gender Neutral",
    "Baby Changing",
    "Family Room",
    "Bidet",
    "Hand Dryer",
];

/// Row layout: 0 name, 1 address, 2 category, 3..=8 amenities, 9 notes.
const ADD_ROWS: usize = 10;

impl Default for AddForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            address: String::new(),
            category: 0,
            amenities: [false; 6],
            notes: String::new(),
            focus: 0,
            phase: SubmitPhase::Editing,
            error: None,
        }
    }
}

impl AddForm {
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % ADD_ROWS;
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + ADD_ROWS - 1) % ADD_ROWS;
    }

    fn text_field(&mut self) -> Option<&mut String> {
        match self.focus {
            0 => Some(&mut self.name),
            1 => Some(&mut self.address),
            9 => Some(&mut self.notes),
            _ => None,
        }
    }

    pub fn insert(&mut self, c: char) {
        if let Some(field) = self.text_field() {
            field.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.text_field() {
            field.pop();
        }
    }

    /// Space on an amenity row, arrows on the category row.
    pub fn toggle(&mut self) {
        if let Some(slot) = self.focus.checked_sub(3) {
            if let Some(flag) = self.amenities.get_mut(slot) {
                *flag = !*flag;
            }
        }
    }

    pub fn cycle_category(&mut self, forward: bool) {
        if self.focus != 2 {
            return;
        }
        let len = Category::ALL.len();
        self.category = if forward {
            (self.category + 1) % len
        } else {
            (self.category + len - 1) % len
        };
    }

    /// Required: name, address. Category always has a selection.
    pub fn validate(&mut self) -> bool {
        if self.name.trim().is_empty() || self.address.trim().is_empty() {
            self.error = Some("Name and address are required");
            false
        } else {
            self.error = None;
            true
        }
    }
}

// -- report a problem -----------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportForm {
    /// Prefilled when the report screen is opened from a detail sheet.
    pub target: Option<String>,
    pub issue: Option<usize>,
    pub details: String,
    /// 0 issue picker, 1 details.
    pub focus: usize,
    pub phase: SubmitPhase,
    pub error: Option<&'static str>,
}

impl ReportForm {
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % 2;
    }

    pub fn insert(&mut self, c: char) {
        if self.focus == 1 {
            self.details.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.focus == 1 {
            self.details.pop();
        }
    }

    pub fn cycle_issue(&mut self, forward: bool) {
        if self.focus != 0 {
            return;
        }
        let len = REPORT_ISSUES.len();
        self.issue = Some(match (self.issue, forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        });
    }

    pub fn validate(&mut self) -> bool {
        if self.issue.is_none() {
            self.error = Some("Select an issue type");
            false
        } else {
            self.error = None;
            true
        }
    }
}

// -- send feedback --------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackForm {
    pub kind: Option<usize>,
    pub message: String,
    pub email: String,
    /// 0 none, 1-5 stars.
    pub rating: usize,
    /// 0 type picker, 1 message, 2 email, 3 rating.
    pub focus: usize,
    pub phase: SubmitPhase,
    pub error: Option<&'static str>,
}

impl FeedbackForm {
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % 4;
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + 3) % 4;
    }

    fn text_field(&mut self) -> Option<&mut String> {
        match self.focus {
            1 => Some(&mut self.message),
            2 => Some(&mut self.email),
            _ => None,
        }
    }

    pub fn insert(&mut self, c: char) {
        if let Some(field) = self.text_field() {
            field.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.text_field() {
            field.pop();
        }
    }

    pub fn cycle(&mut self, forward: bool) {
        match self.focus {
            0 => {
                let len = FEEDBACK_TYPES.len();
                self.kind = Some(match (self.kind, forward) {
                    (None, _) => 0,
                    (Some(i), true) => (i + 1) % len,
                    (Some(i), false) => (i + len - 1) % len,
                });
            }
            3 => {
                self.rating = if forward {
                    (self.rating + 1).min(5)
                } else {
                    self.rating.saturating_sub(1)
                };
            }
            _ => {}
        }
    }

    pub fn validate(&mut self) -> bool {
        if self.kind.is_none() || self.message.trim().is_empty() {
            self.error = Some("Pick a type and write a message");
            false
        } else {
            self.error = None;
            true
        }
    }
}

// -- sign-in modal --------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignInForm {
    pub visible: bool,
    pub sign_up: bool,
    pub email: String,
    pub password: String,
    pub name: String,
    /// 0 email, 1 password, 2 name (sign-up only).
    pub focus: usize,
    pub error: Option<AuthError>,
    pub loading: bool,
}

impl SignInForm {
    pub fn open(&mut self) {
        *self = Self {
            visible: true,
            ..Self::default()
        };
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn toggle_mode(&mut self) {
        self.sign_up = !self.sign_up;
        self.error = None;
        if !self.sign_up && self.focus == 2 {
            self.focus = 0;
        }
    }

    fn field_count(&self) -> usize {
        if self.sign_up {
            3
        } else {
            2
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.field_count();
    }

    fn text_field(&mut self) -> &mut String {
        match self.focus {
            0 => &mut self.email,
            1 => &mut self.password,
            _ => &mut self.name,
        }
    }

    pub fn insert(&mut self, c: char) {
        self.text_field().push(c);
    }

    pub fn backspace(&mut self) {
        self.text_field().pop();
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
            name: self.sign_up.then(|| self.name.clone()),
        }
    }
}

// -- rendering ------------------------------------------------------------

fn field_line<'a>(label: &'a str, value: &'a str, focused: bool, theme: &Theme) -> Line<'a> {
    let marker = if focused { "> " } else { "  " };
    let value_style = if focused {
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text)
    };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(theme.primary)),
        Span::styled(format!("{label}: "), Style::default().fg(theme.muted)),
        Span::styled(if value.is_empty() { "—" } else { value }, value_style),
    ])
}

fn picker_line<'a>(
    label: &'a str,
    selected: Option<&'a str>,
    focused: bool,
    theme: &Theme,
) -> Line<'a> {
    let marker = if focused { "> " } else { "  " };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(theme.primary)),
        Span::styled(format!("{label}: "), Style::default().fg(theme.muted)),
        Span::styled(
            selected.unwrap_or("(←/→ to choose)"),
            Style::default().fg(if selected.is_some() {
                theme.text
            } else {
                theme.muted
            }),
        ),
    ])
}

fn toggle_line<'a>(label: &'a str, on: bool, focused: bool, theme: &Theme) -> Line<'a> {
    let marker = if focused { "> " } else { "  " };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(theme.primary)),
        Span::styled(
            if on { "[x] " } else { "[ ] " },
            Style::default().fg(if on { theme.primary } else { theme.muted }),
        ),
        Span::styled(label, Style::default().fg(theme.text)),
    ])
}

fn form_frame(frame: &mut Frame<'_>, area: Rect, title: &str, theme: &Theme) -> Rect {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.panel_bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

fn status_lines<'a>(
    phase: &'a SubmitPhase,
    error: Option<&'a str>,
    submit_hint: &'a str,
    theme: &Theme,
) -> Vec<Line<'a>> {
    let mut lines = vec![Line::default()];
    match phase {
        SubmitPhase::Submitting => lines.push(Line::styled(
            "Submitting…",
            Style::default().fg(theme.muted),
        )),
        SubmitPhase::Editing => {
            if let Some(error) = error {
                lines.push(Line::styled(error, Style::default().fg(theme.error)));
            }
            lines.push(Line::styled(submit_hint, Style::default().fg(theme.muted)));
        }
        SubmitPhase::Submitted(_) => {}
    }
    lines
}

/// Full-screen success panel shown after a mock submission completes.
fn draw_submitted(frame: &mut Frame<'_>, area: Rect, message: &str, reference: &str, theme: &Theme) {
    let lines = vec![
        Line::default(),
        Line::styled(
            "✓  Thank you!",
            Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
        ),
        Line::default(),
        Line::styled(message, Style::default().fg(theme.text)),
        Line::styled(
            format!("Reference: {reference}"),
            Style::default().fg(theme.muted),
        ),
        Line::default(),
        Line::styled("Esc  back to map", Style::default().fg(theme.muted)),
    ];
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }),
        area,
    );
}

pub fn draw_add(frame: &mut Frame<'_>, area: Rect, form: &AddForm, theme: &Theme) {
    let inner = form_frame(frame, area, "Add Restroom", theme);
    if let SubmitPhase::Submitted(reference) = &form.phase {
        draw_submitted(
            frame,
            inner,
            "Your restroom suggestion is in review.",
            reference,
            theme,
        );
        return;
    }

    let mut lines = vec![
        field_line("Name", &form.name, form.focus == 0, theme),
        field_line("Address", &form.address, form.focus == 1, theme),
        picker_line(
            "Type",
            Some(Category::ALL[form.category].label()),
            form.focus == 2,
            theme,
        ),
        Line::default(),
        Line::styled("Amenities (space to toggle)", Style::default().fg(theme.muted)),
    ];
    for (i, label) in ADD_AMENITY_LABELS.iter().enumerate() {
        lines.push(toggle_line(label, form.amenities[i], form.focus == 3 + i, theme));
    }
    lines.push(Line::default());
    lines.push(field_line("Notes", &form.notes, form.focus == 9, theme));
    lines.extend(status_lines(
        &form.phase,
        form.error,
        "Tab  next field   Enter  submit   Esc  back",
        theme,
    ));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

pub fn draw_report(frame: &mut Frame<'_>, area: Rect, form: &ReportForm, theme: &Theme) {
    let inner = form_frame(frame, area, "Report a Problem", theme);
    if let SubmitPhase::Submitted(reference) = &form.phase {
        draw_submitted(
            frame,
            inner,
            "Report received. The listing will be re-checked.",
            reference,
            theme,
        );
        return;
    }

    let mut lines = Vec::new();
    if let Some(target) = &form.target {
        lines.push(Line::from(vec![
            Span::styled("Reporting: ", Style::default().fg(theme.muted)),
            Span::styled(target.as_str(), Style::default().fg(theme.text)),
        ]));
        lines.push(Line::default());
    }
    lines.push(picker_line(
        "Issue",
        form.issue.map(|i| REPORT_ISSUES[i]),
        form.focus == 0,
        theme,
    ));
    lines.push(field_line("Details", &form.details, form.focus == 1, theme));
    lines.extend(status_lines(
        &form.phase,
        form.error,
        "Tab  next field   Enter  submit   Esc  back",
        theme,
    ));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

pub fn draw_feedback(frame: &mut Frame<'_>, area: Rect, form: &FeedbackForm, theme: &Theme) {
    let inner = form_frame(frame, area, "Send Feedback", theme);
    if let SubmitPhase::Submitted(reference) = &form.phase {
        draw_submitted(frame, inner, "Feedback sent. We read all of it.", reference, theme);
        return;
    }

    let stars = "★".repeat(form.rating) + &"☆".repeat(5 - form.rating);
    let lines = {
        let mut lines = vec![
            picker_line(
                "Type",
                form.kind.map(|i| FEEDBACK_TYPES[i]),
                form.focus == 0,
                theme,
            ),
            field_line("Message", &form.message, form.focus == 1, theme),
            field_line("Email (optional)", &form.email, form.focus == 2, theme),
            picker_line("App rating", Some(stars.as_str()), form.focus == 3, theme),
        ];
        lines.extend(status_lines(
            &form.phase,
            form.error,
            "Tab  next field   Enter  submit   Esc  back",
            theme,
        ));
        lines
    };

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

pub fn draw_sign_in(frame: &mut Frame<'_>, area: Rect, form: &SignInForm, theme: &Theme) {
    let width = area.width.saturating_sub(8).min(48).max(20);
    let height = 12.min(area.height);
    let modal = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 3,
        width,
        height,
    };
    frame.render_widget(Clear, modal);

    let title = if form.sign_up { "Create Account" } else { "Sign In" };
    let inner = form_frame(frame, modal, title, theme);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0)])
        .split(inner);

    let masked = "•".repeat(form.password.chars().count());
    let mut lines = vec![
        field_line("Email", &form.email, form.focus == 0, theme),
        field_line("Password", &masked, form.focus == 1, theme),
    ];
    if form.sign_up {
        lines.push(field_line("Name", &form.name, form.focus == 2, theme));
    }
    lines.push(Line::default());
    if form.loading {
        lines.push(Line::styled("Signing in…", Style::default().fg(theme.muted)));
    } else {
        if let Some(error) = &form.error {
            lines.push(Line::styled(
                error.to_string(),
                Style::default().fg(theme.error),
            ));
        }
        lines.push(Line::styled(
            "Enter  submit   Tab  next   Ctrl+U  switch mode   Esc  close",
            Style::default().fg(theme.muted),
        ));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[0]);
}
