//! Banyo: a map-centric restroom finder for the terminal.
//!
//! All data is mocked in-process. The interesting structure is the state
//! layer: a single [`state::AppStore`] owns every piece of cross-screen
//! state, mutated only through a closed intent set, with durable fields
//! mirrored synchronously to [`prefs`]. Everything the screens display is
//! recomputed from `(state, catalog)` by the pure functions in [`query`].

pub mod auth;
pub mod catalog;
pub mod config;
pub mod geo;
pub mod location;
pub mod prefs;
pub mod query;
pub mod state;
pub mod ui;
