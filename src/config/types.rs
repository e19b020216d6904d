use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub map: MapConfig,
}

/// UI loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Render/tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Geolocation acquisition settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Timeout for the automatic fix attempt after onboarding (default: 5).
    #[serde(default = "default_startup_timeout_secs")]
    pub startup_timeout_secs: u64,
    /// Timeout for the manual locate control (default: 10).
    #[serde(default = "default_locate_timeout_secs")]
    pub locate_timeout_secs: u64,
    /// Artificial delay before the simulated device reports a fix
    /// (default: 600).
    #[serde(default = "default_fix_delay_ms")]
    pub fix_delay_ms: u64,
}

/// Map canvas settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Half-width of the rendered map window, in meters (default: 2500).
    #[serde(default = "default_span_meters")]
    pub span_meters: f64,
    /// Override for the simulated device fix; defaults to a spot near the
    /// default reference point.
    #[serde(default)]
    pub simulated_fix: Option<Coordinate>,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_startup_timeout_secs() -> u64 {
    5
}

fn default_locate_timeout_secs() -> u64 {
    10
}

fn default_fix_delay_ms() -> u64 {
    600
}

fn default_span_meters() -> f64 {
    2500.0
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            startup_timeout_secs: default_startup_timeout_secs(),
            locate_timeout_secs: default_locate_timeout_secs(),
            fix_delay_ms: default_fix_delay_ms(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            span_meters: default_span_meters(),
            simulated_fix: None,
        }
    }
}
