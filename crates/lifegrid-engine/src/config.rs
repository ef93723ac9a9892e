//! Session configuration, validation, and error types.
//!
//! [`LifeConfig`] is the input for constructing a
//! [`LockstepLife`](crate::LockstepLife). It round-trips through TOML so a
//! collaborator can keep it in a file next to its saved documents;
//! [`validate()`](LifeConfig::validate) checks its invariants before any
//! grid is allocated.

use lifegrid_core::{Grid, GridError};
use lifegrid_space::BoundaryMode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while loading or validating a [`LifeConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Width or height is negative, or the grid would be too large.
    #[error("invalid grid size: {0}")]
    Grid(#[from] GridError),
    /// `interval_ms` is zero.
    #[error("interval_ms must be at least 1")]
    ZeroInterval,
    /// The TOML text could not be parsed into a config.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    /// The config could not be rendered as TOML.
    #[error("could not serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── LifeConfig ─────────────────────────────────────────────────────

/// Complete configuration for a Life session.
///
/// Missing TOML keys fall back to [`LifeConfig::default`].
///
/// ```
/// use lifegrid_engine::LifeConfig;
/// use lifegrid_space::BoundaryMode;
///
/// let cfg = LifeConfig::from_toml_str("width = 64\nboundary = \"toroidal\"").unwrap();
/// assert_eq!(cfg.width, 64);
/// assert_eq!(cfg.height, 30);
/// assert_eq!(cfg.boundary, BoundaryMode::Toroidal);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    /// Grid width in cells. Default: 30.
    pub width: i32,
    /// Grid height in cells. Default: 30.
    pub height: i32,
    /// Edge behaviour. Default: [`BoundaryMode::Finite`].
    pub boundary: BoundaryMode,
    /// Seed for reproducible randomization. Default: 0.
    pub seed: u64,
    /// Whether randomization uses `seed` (true) or OS entropy. Default: true.
    pub reproducible: bool,
    /// Cadence hint for callers that animate, in milliseconds. Default: 100.
    pub interval_ms: u64,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width: 30,
            height: 30,
            boundary: BoundaryMode::Finite,
            seed: 0,
            reproducible: true,
            interval_ms: 100,
        }
    }
}

impl LifeConfig {
    /// Validate all invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Grid::check_dimensions(self.width, self.height)?;
        if self.interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Render as a TOML document.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}
