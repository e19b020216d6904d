//! Keyboard dispatch. Reads a state snapshot, decides which surface owns the
//! key (onboarding, modal, overlay, or screen), and turns it into intents or
//! scratch-state edits.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::query;
use crate::state::{AppIntent, AppState, Screen};
use crate::ui::app::App;
use crate::ui::forms::SubmitPhase;
use crate::ui::{filters, menu, search};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.request_quit();
        return;
    }
    // Reachability edge, simulated from the keyboard on any surface.
    if key.code == KeyCode::F(2) {
        app.simulate_connectivity_edge();
        return;
    }

    let state = app.snapshot();

    if !state.onboarding_complete {
        handle_onboarding(app, key);
    } else if app.sign_in.visible {
        handle_sign_in(app, key);
    } else if state.search_open {
        handle_search(app, key, &state);
    } else if state.filters_open {
        handle_filters(app, key, &state);
    } else if state.menu_open {
        handle_menu(app, key);
    } else {
        match state.current_screen {
            Screen::Home => handle_home(app, key, &state),
            Screen::Add => handle_add(app, key),
            Screen::Report => handle_report(app, key),
            Screen::Feedback => handle_feedback(app, key),
            Screen::Profile => handle_profile(app, key, &state),
            Screen::Settings => handle_settings(app, key, &state),
            Screen::Privacy | Screen::Help | Screen::Terms => handle_static(app, key),
        }
    }
}

fn handle_onboarding(app: &mut App, key: KeyEvent) {
    use crate::ui::onboarding::SLIDES;
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('s') => app.dispatch(AppIntent::CompleteOnboarding),
        KeyCode::Left => app.onboarding_slide = app.onboarding_slide.saturating_sub(1),
        KeyCode::Enter | KeyCode::Right | KeyCode::Char(' ') => {
            if app.onboarding_slide + 1 < SLIDES.len() {
                app.onboarding_slide += 1;
            } else {
                // Last slide: kick off the permission request, then enter
                // the app. The fix arrives asynchronously.
                app.request_manual_locate();
                app.dispatch(AppIntent::CompleteOnboarding);
            }
        }
        _ => {}
    }
}

fn handle_home(app: &mut App, key: KeyEvent, state: &AppState) {
    let markers = query::visible_markers(state, app.catalog());
    let marker_count = markers.len();
    let cursor_id = markers.get(app.marker_cursor.min(marker_count.saturating_sub(1))).map(|r| r.id);
    drop(markers);

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('s') | KeyCode::Char('/') => {
            app.search_cursor = 0;
            app.dispatch(AppIntent::ToggleSearchOverlay);
        }
        KeyCode::Char('f') => {
            app.filter_cursor = 0;
            app.dispatch(AppIntent::ToggleFiltersSheet);
        }
        KeyCode::Char('m') => {
            app.menu_cursor = 0;
            app.dispatch(AppIntent::ToggleMenu);
        }
        KeyCode::Char('l') => app.request_manual_locate(),
        KeyCode::Char('d') => app.dispatch(AppIntent::ToggleDarkMode),
        KeyCode::Char('b') => {
            let id = state.selected_restroom.or(cursor_id);
            if let Some(id) = id {
                app.dispatch(AppIntent::ToggleSaved(id));
            }
        }
        KeyCode::Char('r') if state.detail_open => app.open_report_for_selection(),
        KeyCode::Char('e') if state.detail_open => {
            app.dispatch(AppIntent::ToggleDetailExpanded);
        }
        KeyCode::Esc if state.detail_open => app.dispatch(AppIntent::CloseDetail),
        KeyCode::Up | KeyCode::Char('k') => {
            app.marker_cursor = app.marker_cursor.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if marker_count > 0 {
                app.marker_cursor = (app.marker_cursor + 1).min(marker_count - 1);
            }
        }
        KeyCode::Enter => {
            if state.detail_open {
                app.dispatch(AppIntent::ToggleDetailExpanded);
            } else if let Some(id) = cursor_id {
                app.dispatch(AppIntent::SelectRestroom(Some(id)));
            }
        }
        _ => {}
    }
}

fn handle_search(app: &mut App, key: KeyEvent, state: &AppState) {
    let query_blank = state.search_query.trim().is_empty();
    let row_count = if query_blank {
        search::blank_query_terms(state).len()
    } else {
        query::search_results(&state.search_query, app.catalog()).len()
    };

    match key.code {
        KeyCode::Esc => app.dispatch(AppIntent::ToggleSearchOverlay),
        KeyCode::Up => app.search_cursor = app.search_cursor.saturating_sub(1),
        KeyCode::Down => {
            if row_count > 0 {
                app.search_cursor = (app.search_cursor + 1).min(row_count - 1);
            }
        }
        KeyCode::Enter => {
            if query_blank {
                let terms = search::blank_query_terms(state);
                if let Some(term) = terms.get(app.search_cursor) {
                    let term = (*term).to_string();
                    app.search_cursor = 0;
                    app.dispatch(AppIntent::AddRecentSearch(term.clone()));
                    app.dispatch(AppIntent::SetSearchQuery(term));
                }
            } else {
                let results = query::search_results(&state.search_query, app.catalog());
                if let Some(restroom) = results.get(app.search_cursor) {
                    let (id, name) = (restroom.id, restroom.name.clone());
                    drop(results);
                    app.dispatch(AppIntent::AddRecentSearch(name));
                    app.dispatch(AppIntent::SelectRestroom(Some(id)));
                    app.dispatch(AppIntent::ToggleSearchOverlay);
                }
            }
        }
        KeyCode::Backspace => {
            let mut query = state.search_query.clone();
            query.pop();
            app.search_cursor = 0;
            app.dispatch(AppIntent::SetSearchQuery(query));
        }
        KeyCode::Char(c) => {
            let mut query = state.search_query.clone();
            query.push(c);
            app.search_cursor = 0;
            app.dispatch(AppIntent::SetSearchQuery(query));
        }
        _ => {}
    }
}

fn handle_filters(app: &mut App, key: KeyEvent, state: &AppState) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('f') => app.dispatch(AppIntent::ToggleFiltersSheet),
        KeyCode::Char('r') => app.dispatch(AppIntent::ResetFilters),
        KeyCode::Up => app.filter_cursor = app.filter_cursor.saturating_sub(1),
        KeyCode::Down => {
            app.filter_cursor = (app.filter_cursor + 1).min(filters::ROWS - 1);
        }
        KeyCode::Left => {
            if let Some(patch) = filters::patch_for(app.filter_cursor, false, &state.active_filters)
            {
                app.dispatch(AppIntent::SetFilters(patch));
            }
        }
        KeyCode::Right => {
            if let Some(patch) = filters::patch_for(app.filter_cursor, true, &state.active_filters)
            {
                app.dispatch(AppIntent::SetFilters(patch));
            }
        }
        KeyCode::Char(' ') | KeyCode::Enter if app.filter_cursor >= 2 => {
            if let Some(patch) = filters::patch_for(app.filter_cursor, true, &state.active_filters)
            {
                app.dispatch(AppIntent::SetFilters(patch));
            }
        }
        _ => {}
    }
}

fn handle_menu(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('m') => app.dispatch(AppIntent::CloseMenu),
        KeyCode::Up => app.menu_cursor = app.menu_cursor.saturating_sub(1),
        KeyCode::Down => {
            app.menu_cursor = (app.menu_cursor + 1).min(menu::ENTRIES.len() - 1);
        }
        KeyCode::Enter => {
            let (screen, _) = menu::ENTRIES[app.menu_cursor.min(menu::ENTRIES.len() - 1)];
            app.open_screen(screen);
        }
        _ => {}
    }
}

fn handle_add(app: &mut App, key: KeyEvent) {
    if matches!(app.add_form.phase, SubmitPhase::Submitted(_)) {
        if key.code == KeyCode::Esc || key.code == KeyCode::Enter {
            app.open_screen(Screen::Home);
        }
        return;
    }
    match key.code {
        KeyCode::Esc => app.open_screen(Screen::Home),
        KeyCode::Tab | KeyCode::Down => app.add_form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.add_form.focus_prev(),
        KeyCode::Left => app.add_form.cycle_category(false),
        KeyCode::Right => app.add_form.cycle_category(true),
        KeyCode::Enter => app.submit_add(),
        KeyCode::Backspace => app.add_form.backspace(),
        KeyCode::Char(' ') if (3..=8).contains(&app.add_form.focus) => app.add_form.toggle(),
        KeyCode::Char(c) => app.add_form.insert(c),
        _ => {}
    }
}

fn handle_report(app: &mut App, key: KeyEvent) {
    if matches!(app.report_form.phase, SubmitPhase::Submitted(_)) {
        if key.code == KeyCode::Esc || key.code == KeyCode::Enter {
            app.open_screen(Screen::Home);
        }
        return;
    }
    match key.code {
        KeyCode::Esc => app.open_screen(Screen::Home),
        KeyCode::Tab | KeyCode::Down | KeyCode::BackTab | KeyCode::Up => {
            app.report_form.focus_next();
        }
        KeyCode::Left => app.report_form.cycle_issue(false),
        KeyCode::Right => app.report_form.cycle_issue(true),
        KeyCode::Enter => app.submit_report(),
        KeyCode::Backspace => app.report_form.backspace(),
        KeyCode::Char(c) => app.report_form.insert(c),
        _ => {}
    }
}

fn handle_feedback(app: &mut App, key: KeyEvent) {
    if matches!(app.feedback_form.phase, SubmitPhase::Submitted(_)) {
        if key.code == KeyCode::Esc || key.code == KeyCode::Enter {
            app.open_screen(Screen::Home);
        }
        return;
    }
    match key.code {
        KeyCode::Esc => app.open_screen(Screen::Home),
        KeyCode::Tab | KeyCode::Down => app.feedback_form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.feedback_form.focus_prev(),
        KeyCode::Left => app.feedback_form.cycle(false),
        KeyCode::Right => app.feedback_form.cycle(true),
        KeyCode::Enter => app.submit_feedback(),
        KeyCode::Backspace => app.feedback_form.backspace(),
        KeyCode::Char(c) => app.feedback_form.insert(c),
        _ => {}
    }
}

fn handle_sign_in(app: &mut App, key: KeyEvent) {
    if app.sign_in.loading {
        return;
    }
    match key.code {
        KeyCode::Esc => app.sign_in.close(),
        KeyCode::Tab => app.sign_in.focus_next(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.sign_in.toggle_mode();
        }
        KeyCode::Enter => app.submit_sign_in(),
        KeyCode::Backspace => app.sign_in.backspace(),
        KeyCode::Char(c) => app.sign_in.insert(c),
        _ => {}
    }
}

fn handle_profile(app: &mut App, key: KeyEvent, state: &AppState) {
    let saved = &state.saved_restrooms;
    match key.code {
        KeyCode::Esc => app.open_screen(Screen::Home),
        KeyCode::Char('i') if state.user.is_none() => app.sign_in.open(),
        KeyCode::Char('o') if state.user.is_some() => app.sign_out(),
        KeyCode::Up => app.profile_cursor = app.profile_cursor.saturating_sub(1),
        KeyCode::Down => {
            if !saved.is_empty() {
                app.profile_cursor = (app.profile_cursor + 1).min(saved.len() - 1);
            }
        }
        KeyCode::Enter => {
            if let Some(id) = saved.get(app.profile_cursor).copied() {
                app.open_screen(Screen::Home);
                app.dispatch(AppIntent::SelectRestroom(Some(id)));
            }
        }
        KeyCode::Char('u') => {
            if let Some(id) = saved.get(app.profile_cursor).copied() {
                app.dispatch(AppIntent::ToggleSaved(id));
                app.profile_cursor = app.profile_cursor.saturating_sub(1);
            }
        }
        _ => {}
    }
}

fn handle_settings(app: &mut App, key: KeyEvent, state: &AppState) {
    match key.code {
        KeyCode::Esc => app.open_screen(Screen::Home),
        KeyCode::Char('d') => app.dispatch(AppIntent::ToggleDarkMode),
        KeyCode::Char('o') if state.user.is_some() => app.sign_out(),
        _ => {}
    }
}

fn handle_static(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.open_screen(Screen::Home),
        KeyCode::Up => app.static_scroll = app.static_scroll.saturating_sub(1),
        KeyCode::Down => app.static_scroll = app.static_scroll.saturating_add(1),
        _ => {}
    }
}
