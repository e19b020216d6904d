//! Durable fields survive a restart: every mutation that touches the
//! preference store is mirrored synchronously, so a second store built over
//! the same file sees it.

mod common;

use common::{prefs_path, store_at};

use banyo::state::{AppIntent, UserProfile};
use tempfile::TempDir;

#[test]
fn durable_fields_survive_restart() {
    let dir = TempDir::new().unwrap();

    {
        let store = store_at(prefs_path(&dir));
        store.dispatch(AppIntent::ToggleDarkMode);
        store.dispatch(AppIntent::CompleteOnboarding);
        store.dispatch(AppIntent::ToggleSaved(1));
        store.dispatch(AppIntent::ToggleSaved(5));
        store.dispatch(AppIntent::AddRecentSearch("ayala".into()));
        store.dispatch(AppIntent::SetUser(Some(UserProfile {
            display_name: "Maria".into(),
            email: "maria@example.com".into(),
        })));
    }

    let state = store_at(prefs_path(&dir)).snapshot();
    assert!(state.dark_mode);
    assert!(state.onboarding_complete);
    assert_eq!(state.saved_restrooms, vec![1, 5]);
    assert_eq!(state.recent_searches, vec!["ayala"]);
    assert_eq!(state.user.map(|u| u.display_name), Some("Maria".to_string()));
}

#[test]
fn session_only_fields_reset_on_restart() {
    let dir = TempDir::new().unwrap();

    {
        let store = store_at(prefs_path(&dir));
        store.dispatch(AppIntent::CompleteOnboarding);
        store.dispatch(AppIntent::SetOffline(true));
        store.dispatch(AppIntent::SelectRestroom(Some(2)));
        store.dispatch(AppIntent::SetSearchQuery("sm".into()));
    }

    let state = store_at(prefs_path(&dir)).snapshot();
    assert!(state.onboarding_complete);
    assert!(!state.is_offline);
    assert_eq!(state.selected_restroom, None);
    assert_eq!(state.search_query, "");
}

#[test]
fn unsave_is_mirrored_too() {
    let dir = TempDir::new().unwrap();

    {
        let store = store_at(prefs_path(&dir));
        store.dispatch(AppIntent::ToggleSaved(1));
        store.dispatch(AppIntent::ToggleSaved(1));
    }

    assert!(store_at(prefs_path(&dir)).snapshot().saved_restrooms.is_empty());
}

#[test]
fn seeding_prunes_ids_missing_from_the_catalog() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        prefs_path(&dir),
        r#"{"saved_restrooms": [1, 9999, 5], "onboarding_complete": true}"#,
    )
    .unwrap();

    let state = store_at(prefs_path(&dir)).snapshot();
    assert_eq!(state.saved_restrooms, vec![1, 5]);
}

#[test]
fn seeding_clamps_an_oversized_recent_list() {
    let dir = TempDir::new().unwrap();
    let terms: Vec<String> = (1..=12).map(|i| format!("\"t{i}\"")).collect();
    std::fs::write(
        prefs_path(&dir),
        format!(r#"{{"recent_searches": [{}]}}"#, terms.join(",")),
    )
    .unwrap();

    let state = store_at(prefs_path(&dir)).snapshot();
    assert_eq!(state.recent_searches.len(), 8);
    assert_eq!(state.recent_searches[0], "t1");
}
