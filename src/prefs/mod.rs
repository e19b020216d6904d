//! Persistent Preference Store: the durable slice of application state
//! (onboarding flag, theme, saved ids, recent searches, signed-in profile).
//!
//! Only the state container writes here, as part of its own dispatch, so the
//! file has a single writer and never drifts from container state.

mod store;
mod types;

pub use store::{PrefsError, PrefsStore};
pub use types::Prefs;
