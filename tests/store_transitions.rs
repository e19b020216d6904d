//! Store-level transition invariants: the testable properties of the state
//! container, driven through `dispatch` like real UI code.

mod common;

use common::make_store;

use banyo::state::{
    ActiveFilters, AppIntent, FilterPatch, LocationPermission, Screen, UserProfile,
};

// -- overlays and navigation ----------------------------------------------

#[test]
fn navigation_force_closes_every_overlay() {
    let (store, _dir) = make_store();
    store.dispatch(AppIntent::ToggleSearchOverlay);
    store.dispatch(AppIntent::ToggleFiltersSheet);
    store.dispatch(AppIntent::ToggleMenu);
    let state = store.snapshot();
    assert!(state.search_open && state.filters_open && state.menu_open);

    store.dispatch(AppIntent::SetScreen(Screen::Settings));

    let state = store.snapshot();
    assert_eq!(state.current_screen, Screen::Settings);
    assert!(!state.search_open);
    assert!(!state.filters_open);
    assert!(!state.menu_open);
}

#[test]
fn reopened_search_starts_blank() {
    let (store, _dir) = make_store();
    store.dispatch(AppIntent::ToggleSearchOverlay);
    store.dispatch(AppIntent::SetSearchQuery("ayala".into()));
    store.dispatch(AppIntent::ToggleSearchOverlay);
    store.dispatch(AppIntent::ToggleSearchOverlay);

    let state = store.snapshot();
    assert!(state.search_open);
    assert_eq!(state.search_query, "");
}

// -- selection and detail sheet -------------------------------------------

#[test]
fn detail_sheet_lifecycle() {
    let (store, _dir) = make_store();

    store.dispatch(AppIntent::SelectRestroom(Some(1)));
    let state = store.snapshot();
    assert_eq!(state.selected_restroom, Some(1));
    assert!(state.detail_open);
    assert!(!state.detail_expanded);

    store.dispatch(AppIntent::ToggleDetailExpanded);
    assert!(store.snapshot().detail_expanded);

    store.dispatch(AppIntent::CloseDetail);
    let state = store.snapshot();
    assert_eq!(state.selected_restroom, None);
    assert!(!state.detail_open);
    assert!(!state.detail_expanded);
}

#[test]
fn selecting_unknown_id_is_rejected() {
    let (store, _dir) = make_store();
    store.dispatch(AppIntent::SelectRestroom(Some(9999)));
    let state = store.snapshot();
    assert_eq!(state.selected_restroom, None);
    assert!(!state.detail_open);
}

// -- filters ---------------------------------------------------------------

#[test]
fn reset_restores_documented_defaults_from_any_state() {
    let (store, _dir) = make_store();
    store.dispatch(AppIntent::SetFilters(FilterPatch {
        radius: Some(5000),
        min_rating: Some(4.5),
        open_now: Some(true),
        wheelchair: Some(true),
        gender_neutral: Some(true),
        family_room: Some(true),
        baby_changing: Some(true),
    }));
    store.dispatch(AppIntent::ResetFilters);

    let filters = store.snapshot().active_filters;
    assert_eq!(filters, ActiveFilters::default());
    assert_eq!(filters.radius, 1000);
    assert_eq!(filters.min_rating, 0.0);
    assert!(!filters.open_now);
    assert!(!filters.wheelchair);
    assert!(!filters.gender_neutral);
    assert!(!filters.family_room);
    assert!(!filters.baby_changing);
}

#[test]
fn patch_with_any_invalid_field_is_rejected_whole() {
    let (store, _dir) = make_store();
    store.dispatch(AppIntent::SetFilters(FilterPatch {
        radius: Some(1234), // not in the enumerated domain
        open_now: Some(true),
        ..FilterPatch::default()
    }));

    // Neither the invalid radius nor the valid open_now was applied.
    let filters = store.snapshot().active_filters;
    assert_eq!(filters, ActiveFilters::default());
}

#[test]
fn invalid_rating_is_rejected() {
    let (store, _dir) = make_store();
    store.dispatch(AppIntent::SetFilters(FilterPatch {
        min_rating: Some(2.0),
        ..FilterPatch::default()
    }));
    assert_eq!(store.snapshot().active_filters.min_rating, 0.0);
}

// -- recent searches -------------------------------------------------------

#[test]
fn immediate_repeat_is_idempotent() {
    let (store, _dir) = make_store();
    store.dispatch(AppIntent::AddRecentSearch("ayala".into()));
    store.dispatch(AppIntent::AddRecentSearch("ayala".into()));
    assert_eq!(store.snapshot().recent_searches, vec!["ayala"]);
}

#[test]
fn nine_distinct_terms_keep_the_eight_most_recent() {
    let (store, _dir) = make_store();
    for i in 1..=9 {
        store.dispatch(AppIntent::AddRecentSearch(format!("term {i}")));
    }
    let recent = store.snapshot().recent_searches;
    assert_eq!(recent.len(), 8);
    assert_eq!(recent[0], "term 9");
    assert_eq!(recent[7], "term 2");
}

#[test]
fn re_adding_moves_to_front_without_duplicating() {
    let (store, _dir) = make_store();
    store.dispatch(AppIntent::AddRecentSearch("a".into()));
    store.dispatch(AppIntent::AddRecentSearch("b".into()));
    store.dispatch(AppIntent::AddRecentSearch("c".into()));
    store.dispatch(AppIntent::AddRecentSearch("a".into()));
    assert_eq!(store.snapshot().recent_searches, vec!["a", "c", "b"]);
}

#[test]
fn whitespace_only_term_is_rejected() {
    let (store, _dir) = make_store();
    store.dispatch(AppIntent::AddRecentSearch("   ".into()));
    assert!(store.snapshot().recent_searches.is_empty());
}

// -- saved restrooms -------------------------------------------------------

#[test]
fn toggle_saved_twice_is_an_involution() {
    let (store, _dir) = make_store();
    store.dispatch(AppIntent::ToggleSaved(3));
    assert_eq!(store.snapshot().saved_restrooms, vec![3]);
    store.dispatch(AppIntent::ToggleSaved(3));
    assert!(store.snapshot().saved_restrooms.is_empty());
}

#[test]
fn saving_unknown_id_is_rejected() {
    let (store, _dir) = make_store();
    store.dispatch(AppIntent::ToggleSaved(9999));
    assert!(store.snapshot().saved_restrooms.is_empty());
}

// -- session-only fields ---------------------------------------------------

#[test]
fn location_and_offline_transitions() {
    let (store, _dir) = make_store();
    store.dispatch(AppIntent::SetLocationPermission(LocationPermission::Denied));
    store.dispatch(AppIntent::SetOffline(true));

    let state = store.snapshot();
    assert_eq!(state.location_permission, LocationPermission::Denied);
    assert!(state.is_offline);

    store.dispatch(AppIntent::SetOffline(false));
    assert!(!store.snapshot().is_offline);
}

#[test]
fn set_user_and_sign_out() {
    let (store, _dir) = make_store();
    store.dispatch(AppIntent::SetUser(Some(UserProfile {
        display_name: "Kat".into(),
        email: "kat@example.com".into(),
    })));
    assert_eq!(
        store.snapshot().user.map(|u| u.email),
        Some("kat@example.com".to_string())
    );

    store.dispatch(AppIntent::SetUser(None));
    assert!(store.snapshot().user.is_none());
}
