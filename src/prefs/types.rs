use serde::{Deserialize, Serialize};

use crate::catalog::RestroomId;
use crate::state::UserProfile;

/// Durable on-device preferences. One JSON document; every field is optional
/// in the file so a partial or older document still loads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prefs {
    #[serde(default)]
    pub onboarding_complete: bool,
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default)]
    pub saved_restrooms: Vec<RestroomId>,
    /// Most-recent-first, capped by the state container at eight.
    #[serde(default)]
    pub recent_searches: Vec<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
}
