//! Mock authentication flow.
//!
//! Not a contract with a real identity provider: after client-side field
//! validation and a fixed artificial delay, sign-in always succeeds. The
//! display name comes from the provided name when signing up, otherwise from
//! the local part of the email. The resulting profile is dispatched through
//! the store, which also persists it — the preference file never disagrees
//! with container state.

use std::time::Duration;

use thiserror::Error;

use crate::state::{AppIntent, AppStore, UserProfile};

/// Simulated round-trip latency for the fake identity call.
pub const AUTH_DELAY: Duration = Duration::from_millis(1200);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Please enter your email")]
    EmptyEmail,
    #[error("Please enter your password")]
    EmptyPassword,
    #[error("Please enter your name")]
    EmptyName,
}

/// Sign-in or sign-up input. `name` is `Some` for sign-up, where it is a
/// required field.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

impl Credentials {
    /// Client-side validation, run before the simulated request so an empty
    /// field never incurs the artificial delay.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.email.trim().is_empty() {
            return Err(AuthError::EmptyEmail);
        }
        if self.password.trim().is_empty() {
            return Err(AuthError::EmptyPassword);
        }
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(AuthError::EmptyName);
            }
        }
        Ok(())
    }

    fn derive_profile(&self) -> UserProfile {
        let email = self.email.trim().to_lowercase();
        let display_name = match &self.name {
            Some(name) => name.trim().to_string(),
            None => email.split('@').next().unwrap_or_default().to_string(),
        };
        UserProfile {
            display_name,
            email,
        }
    }
}

/// Run the mock flow to completion and hand the profile to the store.
pub async fn sign_in(credentials: Credentials, store: &AppStore) -> Result<UserProfile, AuthError> {
    credentials.validate()?;
    tokio::time::sleep(AUTH_DELAY).await;

    let profile = credentials.derive_profile();
    store.dispatch(AppIntent::SetUser(Some(profile.clone())));
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(email: &str, password: &str, name: Option<&str>) -> Credentials {
        Credentials {
            email: email.into(),
            password: password.into(),
            name: name.map(Into::into),
        }
    }

    #[test]
    fn empty_fields_are_rejected_in_order() {
        assert_eq!(creds("", "pw", None).validate(), Err(AuthError::EmptyEmail));
        assert_eq!(creds("a@b.ph", "", None).validate(), Err(AuthError::EmptyPassword));
        assert_eq!(
            creds("a@b.ph", "pw", Some("  ")).validate(),
            Err(AuthError::EmptyName)
        );
        assert_eq!(creds("a@b.ph", "pw", None).validate(), Ok(()));
    }

    #[test]
    fn sign_in_derives_name_from_email_local_part() {
        let profile = creds("Maria.Lopez@example.com", "pw", None).derive_profile();
        assert_eq!(profile.display_name, "maria.lopez");
        assert_eq!(profile.email, "maria.lopez@example.com");
    }

    #[test]
    fn sign_up_uses_provided_name() {
        let profile = creds("kat@example.com", "pw", Some("  Kat R. ")).derive_profile();
        assert_eq!(profile.display_name, "Kat R.");
        assert_eq!(profile.email, "kat@example.com");
    }
}
