//! The mock sign-in flow end to end: delay, profile derivation, store
//! dispatch, and persistence through the preference file.

mod common;

use common::{make_store, prefs_path, store_at};

use banyo::auth::{sign_in, AuthError, Credentials};
use tempfile::TempDir;

fn creds(email: &str, password: &str, name: Option<&str>) -> Credentials {
    Credentials {
        email: email.into(),
        password: password.into(),
        name: name.map(Into::into),
    }
}

#[tokio::test(start_paused = true)]
async fn sign_in_updates_state_and_lowercases_email() {
    let (store, _dir) = make_store();

    let profile = sign_in(creds("Maria.Lopez@Example.Com", "secret", None), &store)
        .await
        .expect("mock auth always succeeds");

    assert_eq!(profile.email, "maria.lopez@example.com");
    assert_eq!(profile.display_name, "maria.lopez");
    assert_eq!(store.snapshot().user, Some(profile));
}

#[tokio::test(start_paused = true)]
async fn sign_up_uses_the_provided_name() {
    let (store, _dir) = make_store();

    let profile = sign_in(creds("kat@example.com", "secret", Some("Kat R.")), &store)
        .await
        .unwrap();

    assert_eq!(profile.display_name, "Kat R.");
}

#[tokio::test(start_paused = true)]
async fn empty_password_fails_validation_without_state_change() {
    let (store, _dir) = make_store();

    let result = sign_in(creds("a@b.ph", "", None), &store).await;

    assert_eq!(result.unwrap_err(), AuthError::EmptyPassword);
    assert!(store.snapshot().user.is_none());
}

#[tokio::test(start_paused = true)]
async fn signed_in_profile_survives_restart() {
    let dir = TempDir::new().unwrap();

    {
        let store = store_at(prefs_path(&dir));
        sign_in(creds("dennis@example.com", "secret", None), &store)
            .await
            .unwrap();
    }

    let state = store_at(prefs_path(&dir)).snapshot();
    assert_eq!(state.user.map(|u| u.email), Some("dennis@example.com".to_string()));
}
