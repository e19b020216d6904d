//! Application configuration: optional TOML file for the knobs that are not
//! user preferences (tick rate, geolocation timeouts, map canvas span).
//! Missing file means defaults; a malformed file is an error at startup.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LocationConfig, MapConfig, UiConfig};
