use crate::catalog::RestroomId;
use crate::geo::Coordinate;
use crate::state::app_state::{FilterPatch, LocationPermission, Screen, UserProfile};
use crate::state::mvi::Intent;

/// The closed set of state transitions. Every mutation of
/// [`AppState`](crate::state::AppState) goes through one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Flip the theme. Durable.
    ToggleDarkMode,
    /// One-way: there is no un-complete. Durable.
    CompleteOnboarding,
    SetLocationPermission(LocationPermission),
    SetUserLocation(Coordinate),
    /// `Some(id)` opens the detail sheet collapsed; `None` clears selection.
    SelectRestroom(Option<RestroomId>),
    /// Meaningful only while a restroom is selected; otherwise a no-op.
    ToggleDetailExpanded,
    CloseDetail,
    SetSearchQuery(String),
    /// Opening or closing always clears the query.
    ToggleSearchOverlay,
    ToggleFiltersSheet,
    ToggleMenu,
    CloseMenu,
    /// Shallow merge; rejected whole if any field is out of domain.
    SetFilters(FilterPatch),
    ResetFilters,
    /// Dedupe-and-prepend, capped at eight. Durable.
    AddRecentSearch(String),
    /// Add if absent, remove if present. Durable.
    ToggleSaved(RestroomId),
    /// Driven by the external reachability signal.
    SetOffline(bool),
    /// Navigating force-closes the search overlay, filter sheet, and menu.
    SetScreen(Screen),
    /// Sign-in result or sign-out. Durable.
    SetUser(Option<UserProfile>),
}

impl Intent for AppIntent {}
