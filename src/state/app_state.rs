use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, RestroomId};
use crate::geo::Coordinate;
use crate::prefs::Prefs;
use crate::state::mvi::Model;

/// Cap on the recent-search list. Oldest entries fall off the end.
pub const MAX_RECENT_SEARCHES: usize = 8;

/// Full-screen destinations. Transient overlays (search, filters, menu) are
/// separate flags on [`AppState`] and are force-closed on navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Home,
    Add,
    Report,
    Profile,
    Settings,
    Privacy,
    Help,
    Feedback,
    Terms,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Banyo",
            Screen::Add => "Add Restroom",
            Screen::Report => "Report a Problem",
            Screen::Profile => "Profile",
            Screen::Settings => "Settings",
            Screen::Privacy => "Privacy Policy",
            Screen::Help => "Help & Support",
            Screen::Feedback => "Send Feedback",
            Screen::Terms => "Terms of Service",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LocationPermission {
    #[default]
    Unknown,
    Granted,
    Denied,
}

/// Signed-in profile. Durable; the mock auth flow produces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub display_name: String,
    pub email: String,
}

/// Search radius options offered by the filter sheet, in meters.
pub const RADIUS_OPTIONS: [u32; 4] = [500, 1000, 2000, 5000];

/// Minimum-rating options offered by the filter sheet. 0 means "any".
pub const RATING_OPTIONS: [f32; 5] = [0.0, 3.0, 3.5, 4.0, 4.5];

/// Marker filter state. Every field has a documented default; the
/// active-filter badge lights up whenever any field differs from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveFilters {
    /// Meters from the user (or the default reference point).
    pub radius: u32,
    /// Records below this rating are hidden. 0 disables the predicate.
    pub min_rating: f32,
    pub open_now: bool,
    pub wheelchair: bool,
    pub gender_neutral: bool,
    pub family_room: bool,
    pub baby_changing: bool,
}

impl Default for ActiveFilters {
    fn default() -> Self {
        Self {
            radius: 1000,
            min_rating: 0.0,
            open_now: false,
            wheelchair: false,
            gender_neutral: false,
            family_room: false,
            baby_changing: false,
        }
    }
}

/// Partial update for [`ActiveFilters`]. Absent fields are left unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FilterPatch {
    pub radius: Option<u32>,
    pub min_rating: Option<f32>,
    pub open_now: Option<bool>,
    pub wheelchair: Option<bool>,
    pub gender_neutral: Option<bool>,
    pub family_room: Option<bool>,
    pub baby_changing: Option<bool>,
}

impl FilterPatch {
    /// Every provided field must sit in its enumerated domain. A patch with
    /// any out-of-domain field is rejected whole at the store boundary.
    pub fn is_valid(&self) -> bool {
        let radius_ok = self
            .radius
            .map_or(true, |r| RADIUS_OPTIONS.contains(&r));
        let rating_ok = self
            .min_rating
            .map_or(true, |m| RATING_OPTIONS.iter().any(|opt| *opt == m));
        radius_ok && rating_ok
    }

    pub fn apply(self, filters: ActiveFilters) -> ActiveFilters {
        ActiveFilters {
            radius: self.radius.unwrap_or(filters.radius),
            min_rating: self.min_rating.unwrap_or(filters.min_rating),
            open_now: self.open_now.unwrap_or(filters.open_now),
            wheelchair: self.wheelchair.unwrap_or(filters.wheelchair),
            gender_neutral: self.gender_neutral.unwrap_or(filters.gender_neutral),
            family_room: self.family_room.unwrap_or(filters.family_room),
            baby_changing: self.baby_changing.unwrap_or(filters.baby_changing),
        }
    }
}

/// The single cross-screen state aggregate. Owned by
/// [`AppStore`](crate::state::AppStore); mutated only through
/// [`AppIntent`](crate::state::AppIntent) dispatch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub dark_mode: bool,
    pub onboarding_complete: bool,
    pub location_permission: LocationPermission,
    pub user_location: Option<Coordinate>,
    pub selected_restroom: Option<RestroomId>,
    pub detail_open: bool,
    pub detail_expanded: bool,
    pub search_query: String,
    pub search_open: bool,
    pub filters_open: bool,
    pub menu_open: bool,
    pub active_filters: ActiveFilters,
    /// Most-recent-first, unique, at most [`MAX_RECENT_SEARCHES`].
    pub recent_searches: Vec<String>,
    /// Insertion-ordered set; only ids present in the catalog.
    pub saved_restrooms: Vec<RestroomId>,
    pub is_offline: bool,
    pub current_screen: Screen,
    pub user: Option<UserProfile>,
}

impl Model for AppState {}

impl AppState {
    /// Initial state: durable fields seeded from the preference store,
    /// everything else at documented defaults. Saved ids that do not exist in
    /// the catalog are pruned; the recent list is re-clamped defensively in
    /// case the file was edited by hand.
    pub fn seeded(prefs: &Prefs, catalog: &Catalog) -> Self {
        let saved_restrooms: Vec<RestroomId> = prefs
            .saved_restrooms
            .iter()
            .copied()
            .filter(|id| catalog.contains(*id))
            .collect();

        let mut recent_searches: Vec<String> = Vec::new();
        for term in &prefs.recent_searches {
            if !recent_searches.contains(term) {
                recent_searches.push(term.clone());
            }
        }
        recent_searches.truncate(MAX_RECENT_SEARCHES);

        Self {
            dark_mode: prefs.dark_mode,
            onboarding_complete: prefs.onboarding_complete,
            saved_restrooms,
            recent_searches,
            user: prefs.user.clone(),
            ..Self::default()
        }
    }
}
