//! Runtime configuration.
//!
//! Values are layered: built-in defaults, then a `.env` file, then the
//! process environment, then command-line flags (applied by the caller).

use std::env;

use serde::Serialize;

use crate::marker::{DEFAULT_SQUARE_WIDTH, MAX_SQUARE_WIDTH};

/// Campus service address used when nothing else is configured.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:4567";

/// Initial zoom level of the map.
pub const DEFAULT_ZOOM: u8 = 15;

/// Geographic center of the campus map.
pub const CAMPUS_CENTER: LatLng = LatLng { lat: 47.655_548, lng: -122.303_2 };

/// Environment variable overriding [`Config::server_url`].
pub const SERVER_ENV: &str = "CAMPUS_PATHS_SERVER";

/// Environment variable overriding [`Config::square_width`].
pub const SQUARE_WIDTH_ENV: &str = "CAMPUS_PATHS_SQUARE_WIDTH";

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

/// Configuration could not be read.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable holds something unparseable.
    #[error("invalid value {value:?} for {name}: expected an integer from 1 to 1000")]
    InvalidNumber {
        /// Variable name.
        name: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Everything the route drawing pipeline needs to know about its surroundings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    /// Base URL of the campus service, without a trailing slash.
    pub server_url: String,
    /// Side length of endpoint markers.
    pub square_width: u32,
    /// Where the map is centered.
    pub map_center: LatLng,
    /// Initial zoom level.
    pub zoom: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            square_width: DEFAULT_SQUARE_WIDTH,
            map_center: CAMPUS_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl Config {
    /// Loads `.env` (if present) and reads overrides from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if an override is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is the common case.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if an override is present but malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(url) = lookup(SERVER_ENV) {
            config = config.with_server_url(&url);
        }
        if let Some(raw) = lookup(SQUARE_WIDTH_ENV) {
            config.square_width = parse_width(SQUARE_WIDTH_ENV, &raw)?;
        }
        Ok(config)
    }

    /// Replaces the server URL, dropping any trailing slash.
    #[must_use]
    pub fn with_server_url(mut self, url: &str) -> Self {
        self.server_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Replaces the marker width.
    #[must_use]
    pub fn with_square_width(mut self, width: u32) -> Self {
        self.square_width = width;
        self
    }
}

fn parse_width(name: &'static str, raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(width) if (1..=MAX_SQUARE_WIDTH).contains(&width) => Ok(width),
        _ => Err(ConfigError::InvalidNumber { name, value: raw.to_string() }),
    }
}
