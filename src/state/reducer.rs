use crate::state::app_state::{ActiveFilters, AppState, MAX_RECENT_SEARCHES};
use crate::state::intent::AppIntent;
use crate::state::mvi::Reducer;

/// Pure transition function for [`AppState`]. Inputs are validated by the
/// store before they reach here, so every arm is total: no arm panics and no
/// arm returns an error.
pub struct AppReducer;

impl Reducer for AppReducer {
    type Model = AppState;
    type Intent = AppIntent;

    fn reduce(state: Self::Model, intent: Self::Intent) -> Self::Model {
        match intent {
            AppIntent::ToggleDarkMode => AppState {
                dark_mode: !state.dark_mode,
                ..state
            },
            AppIntent::CompleteOnboarding => AppState {
                onboarding_complete: true,
                ..state
            },
            AppIntent::SetLocationPermission(permission) => AppState {
                location_permission: permission,
                ..state
            },
            AppIntent::SetUserLocation(position) => AppState {
                user_location: Some(position),
                ..state
            },
            AppIntent::SelectRestroom(selection) => AppState {
                detail_open: selection.is_some(),
                // Selection change always collapses the sheet.
                detail_expanded: false,
                selected_restroom: selection,
                ..state
            },
            AppIntent::ToggleDetailExpanded => {
                if state.selected_restroom.is_none() {
                    state
                } else {
                    AppState {
                        detail_expanded: !state.detail_expanded,
                        ..state
                    }
                }
            }
            AppIntent::CloseDetail => AppState {
                detail_open: false,
                detail_expanded: false,
                selected_restroom: None,
                ..state
            },
            AppIntent::SetSearchQuery(query) => AppState {
                search_query: query,
                ..state
            },
            AppIntent::ToggleSearchOverlay => AppState {
                search_open: !state.search_open,
                search_query: String::new(),
                ..state
            },
            AppIntent::ToggleFiltersSheet => AppState {
                filters_open: !state.filters_open,
                ..state
            },
            AppIntent::ToggleMenu => AppState {
                menu_open: !state.menu_open,
                ..state
            },
            AppIntent::CloseMenu => AppState {
                menu_open: false,
                ..state
            },
            AppIntent::SetFilters(patch) => AppState {
                active_filters: patch.apply(state.active_filters),
                ..state
            },
            AppIntent::ResetFilters => AppState {
                active_filters: ActiveFilters::default(),
                ..state
            },
            AppIntent::AddRecentSearch(term) => {
                let mut recent: Vec<String> = state
                    .recent_searches
                    .iter()
                    .filter(|existing| **existing != term)
                    .cloned()
                    .collect();
                recent.insert(0, term);
                recent.truncate(MAX_RECENT_SEARCHES);
                AppState {
                    recent_searches: recent,
                    ..state
                }
            }
            AppIntent::ToggleSaved(id) => {
                let saved = if state.saved_restrooms.contains(&id) {
                    state
                        .saved_restrooms
                        .iter()
                        .copied()
                        .filter(|existing| *existing != id)
                        .collect()
                } else {
                    let mut saved = state.saved_restrooms.clone();
                    saved.push(id);
                    saved
                };
                AppState {
                    saved_restrooms: saved,
                    ..state
                }
            }
            AppIntent::SetOffline(offline) => AppState {
                is_offline: offline,
                ..state
            },
            AppIntent::SetScreen(screen) => AppState {
                current_screen: screen,
                // Full-screen navigation and transient overlays are mutually
                // exclusive.
                search_open: false,
                filters_open: false,
                menu_open: false,
                ..state
            },
            AppIntent::SetUser(user) => AppState { user, ..state },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::app_state::{FilterPatch, Screen};

    fn reduce(state: AppState, intent: AppIntent) -> AppState {
        AppReducer::reduce(state, intent)
    }

    #[test]
    fn select_opens_detail_collapsed() {
        let state = reduce(AppState::default(), AppIntent::SelectRestroom(Some(3)));
        assert_eq!(state.selected_restroom, Some(3));
        assert!(state.detail_open);
        assert!(!state.detail_expanded);
    }

    #[test]
    fn selection_change_collapses_expanded_detail() {
        let mut state = reduce(AppState::default(), AppIntent::SelectRestroom(Some(3)));
        state = reduce(state, AppIntent::ToggleDetailExpanded);
        assert!(state.detail_expanded);

        state = reduce(state, AppIntent::SelectRestroom(Some(5)));
        assert_eq!(state.selected_restroom, Some(5));
        assert!(!state.detail_expanded);
    }

    #[test]
    fn close_detail_clears_selection_and_flags() {
        let mut state = reduce(AppState::default(), AppIntent::SelectRestroom(Some(3)));
        state = reduce(state, AppIntent::ToggleDetailExpanded);
        state = reduce(state, AppIntent::CloseDetail);
        assert_eq!(state.selected_restroom, None);
        assert!(!state.detail_open);
        assert!(!state.detail_expanded);
    }

    #[test]
    fn toggle_expanded_without_selection_is_noop() {
        let state = reduce(AppState::default(), AppIntent::ToggleDetailExpanded);
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn toggle_search_clears_query_both_ways() {
        let mut state = reduce(AppState::default(), AppIntent::ToggleSearchOverlay);
        assert!(state.search_open);

        state = reduce(state, AppIntent::SetSearchQuery("ayala".into()));
        state = reduce(state, AppIntent::ToggleSearchOverlay);
        assert!(!state.search_open);
        assert!(state.search_query.is_empty());
    }

    #[test]
    fn navigation_closes_all_overlays() {
        let mut state = AppState {
            search_open: true,
            filters_open: true,
            menu_open: true,
            ..AppState::default()
        };
        state = reduce(state, AppIntent::SetScreen(Screen::Settings));
        assert_eq!(state.current_screen, Screen::Settings);
        assert!(!state.search_open);
        assert!(!state.filters_open);
        assert!(!state.menu_open);
    }

    #[test]
    fn recent_search_dedupes_and_prepends() {
        let mut state = reduce(AppState::default(), AppIntent::AddRecentSearch("ayala".into()));
        state = reduce(state, AppIntent::AddRecentSearch("it park".into()));
        state = reduce(state, AppIntent::AddRecentSearch("ayala".into()));
        assert_eq!(state.recent_searches, vec!["ayala", "it park"]);
    }

    #[test]
    fn recent_search_immediate_repeat_is_idempotent() {
        let mut state = reduce(AppState::default(), AppIntent::AddRecentSearch("sm".into()));
        state = reduce(state, AppIntent::AddRecentSearch("sm".into()));
        assert_eq!(state.recent_searches, vec!["sm"]);
    }

    #[test]
    fn recent_search_caps_at_eight_most_recent() {
        let mut state = AppState::default();
        for i in 1..=9 {
            state = reduce(state, AppIntent::AddRecentSearch(format!("term {i}")));
        }
        assert_eq!(state.recent_searches.len(), MAX_RECENT_SEARCHES);
        assert_eq!(state.recent_searches.first().unwrap(), "term 9");
        assert_eq!(state.recent_searches.last().unwrap(), "term 2");
    }

    #[test]
    fn toggle_saved_is_an_involution() {
        let original = AppState {
            saved_restrooms: vec![1, 2],
            ..AppState::default()
        };
        let toggled = reduce(original.clone(), AppIntent::ToggleSaved(7));
        assert!(toggled.saved_restrooms.contains(&7));
        let back = reduce(toggled, AppIntent::ToggleSaved(7));
        assert_eq!(back.saved_restrooms, original.saved_restrooms);
    }

    #[test]
    fn reset_filters_restores_documented_defaults() {
        let mut state = reduce(
            AppState::default(),
            AppIntent::SetFilters(FilterPatch {
                radius: Some(5000),
                min_rating: Some(4.5),
                open_now: Some(true),
                wheelchair: Some(true),
                ..FilterPatch::default()
            }),
        );
        state = reduce(state, AppIntent::ResetFilters);
        assert_eq!(state.active_filters, ActiveFilters::default());
        assert_eq!(state.active_filters.radius, 1000);
        assert_eq!(state.active_filters.min_rating, 0.0);
    }

    #[test]
    fn set_filters_merges_only_provided_fields() {
        let state = reduce(
            AppState::default(),
            AppIntent::SetFilters(FilterPatch {
                open_now: Some(true),
                ..FilterPatch::default()
            }),
        );
        assert!(state.active_filters.open_now);
        assert_eq!(state.active_filters.radius, 1000);
        assert!(!state.active_filters.wheelchair);
    }

    #[test]
    fn complete_onboarding_is_one_way() {
        let state = reduce(AppState::default(), AppIntent::CompleteOnboarding);
        assert!(state.onboarding_complete);
        // No intent exists to unset it; flipping the theme must not touch it.
        let state = reduce(state, AppIntent::ToggleDarkMode);
        assert!(state.onboarding_complete);
    }
}
