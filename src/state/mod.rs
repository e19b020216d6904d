//! Application State Container.
//!
//! Single source of truth for all cross-screen state, built on the MVI
//! primitives in [`mvi`]: a closed [`AppIntent`] set, a pure [`AppReducer`],
//! and an [`AppStore`] that makes each transition atomic and mirrors durable
//! fields to the preference store in the same operation.

mod app_state;
mod intent;
pub mod mvi;
mod reducer;
mod store;

pub use app_state::{
    ActiveFilters, AppState, FilterPatch, LocationPermission, Screen, UserProfile,
    MAX_RECENT_SEARCHES, RADIUS_OPTIONS, RATING_OPTIONS,
};
pub use intent::AppIntent;
pub use reducer::AppReducer;
pub use store::AppStore;
