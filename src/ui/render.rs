//! Top-level draw: picks the active surface from the state snapshot and
//! layers overlays over the map in z-order.

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::query;
use crate::state::Screen;
use crate::ui::app::App;
use crate::ui::map::MapView;
use crate::ui::search::SearchView;
use crate::ui::theme::Theme;
use crate::ui::{detail, filters, forms, map, menu, onboarding, screens, search};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let state = app.snapshot();
    let theme = Theme::for_mode(state.dark_mode);
    let area = frame.area();

    frame.render_widget(Block::default().style(Style::default().bg(theme.bg)), area);

    if !state.onboarding_complete {
        onboarding::draw(frame, area, app.onboarding_slide, &theme);
        return;
    }

    match state.current_screen {
        Screen::Home => {
            let markers = query::visible_markers(&state, app.catalog());
            let cursor = app.marker_cursor.min(markers.len().saturating_sub(1));
            map::draw(
                frame,
                area,
                &MapView {
                    state: &state,
                    markers: &markers,
                    cursor,
                    locating: app.locating,
                    span_meters: app.config().map.span_meters,
                },
                &theme,
            );

            if state.detail_open {
                detail::draw(frame, area, &state, app.catalog(), &theme);
            }
            if state.filters_open {
                filters::draw(frame, area, &state.active_filters, app.filter_cursor, &theme);
            }
            if state.search_open {
                let results = query::search_results(&state.search_query, app.catalog());
                let cursor_rows = if state.search_query.trim().is_empty() {
                    search::blank_query_terms(&state).len()
                } else {
                    results.len()
                };
                search::draw(
                    frame,
                    area,
                    &SearchView {
                        state: &state,
                        results: &results,
                        cursor: app.search_cursor.min(cursor_rows.saturating_sub(1)),
                    },
                    &theme,
                );
            }
            if state.menu_open {
                menu::draw(frame, area, &state, app.menu_cursor, &theme);
            }
        }
        Screen::Add => forms::draw_add(frame, area, &app.add_form, &theme),
        Screen::Report => forms::draw_report(frame, area, &app.report_form, &theme),
        Screen::Feedback => forms::draw_feedback(frame, area, &app.feedback_form, &theme),
        Screen::Profile => {
            screens::draw_profile(frame, area, &state, app.catalog(), app.profile_cursor, &theme);
            if app.sign_in.visible {
                forms::draw_sign_in(frame, area, &app.sign_in, &theme);
            }
        }
        Screen::Settings => screens::draw_settings(frame, area, &state, &theme),
        Screen::Privacy | Screen::Help | Screen::Terms => {
            screens::draw_static(frame, area, state.current_screen, app.static_scroll, &theme);
        }
    }
}
