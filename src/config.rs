//! Marker pipeline settings.
//!
//! Defaults match the map front-end: no registry filter and a ±1e-4 degree
//! jitter so co-located projects do not render as a single dot.

use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind};

pub const ENV_SOURCES: &str = "RADIUS_SOURCES";
pub const ENV_JITTER: &str = "RADIUS_JITTER";
pub const ENV_SEED: &str = "RADIUS_SEED";

pub const DEFAULT_JITTER: f64 = 1e-4;
/// Largest accepted jitter half-width, in degrees.
pub const MAX_JITTER: f64 = 180.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerConfig {
    /// Registries to keep (case-insensitive). Empty keeps everything.
    pub sources: Vec<String>,
    /// Half-width of the uniform jitter added to lat/lon, in degrees.
    pub jitter: f64,
    /// Fixed RNG seed for reproducible jitter.
    pub seed: Option<u64>,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            jitter: DEFAULT_JITTER,
            seed: None,
        }
    }
}

impl MarkerConfig {
    /// Defaults overridden by `RADIUS_*` variables (a `.env` file is honored).
    pub fn from_env() -> Result<Self, Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each `RADIUS_*` key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_SOURCES) {
            config.sources = raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(raw) = lookup(ENV_JITTER) {
            config.jitter = raw.trim().parse::<f64>().map_err(|e| {
                Error::new(ErrorKind::InvalidConfig, format!("Invalid {ENV_JITTER} '{raw}': {e}"))
            })?;
        }
        if let Some(raw) = lookup(ENV_SEED) {
            let seed = raw.trim().parse::<u64>().map_err(|e| {
                Error::new(ErrorKind::InvalidConfig, format!("Invalid {ENV_SEED} '{raw}': {e}"))
            })?;
            config.seed = Some(seed);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !(0.0..=MAX_JITTER).contains(&self.jitter) {
            return Err(Error::new(
                ErrorKind::InvalidConfig,
                format!("Jitter must be within [0, {MAX_JITTER}] degrees (got {}).", self.jitter),
            ));
        }
        Ok(())
    }
}
