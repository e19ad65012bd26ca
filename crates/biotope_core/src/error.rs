//! Error types for biotope_core.
//!
//! Configuration is the only fallible surface of the core: the simulation
//! itself treats out-of-range neighbors as absent and never fails.

use thiserror::Error;

/// Main error type for configuring a simulation.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Field width or height is zero, or the cell count overflows `usize`
    #[error("Invalid field dimensions: {width}x{height} (need a non-empty, addressable grid)")]
    InvalidDimensions { width: usize, height: usize },

    /// Probability outside [0, 1] or NaN
    #[error("Invalid rate `{name}`: {value} (must be in [0.0, 1.0])")]
    InvalidRate { name: &'static str, value: f64 },

    /// Frame rate limit of zero
    #[error("Invalid frame rate limit: {0} (must be > 0)")]
    InvalidFrameRate(u32),

    /// Grid rows that do not share a common width
    #[error("Ragged grid: row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// File system errors
    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias for biotope_core operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

impl ConfigError {
    /// Creates a new rate error.
    #[must_use]
    pub fn rate(name: &'static str, value: f64) -> Self {
        Self::InvalidRate { name, value }
    }

    /// Creates a new dimensions error.
    #[must_use]
    pub fn dimensions(width: usize, height: usize) -> Self {
        Self::InvalidDimensions { width, height }
    }
}

/// Checks that a `width` x `height` grid is non-empty and its cell count
/// fits in `usize`. Returns the cell count.
pub(crate) fn check_dimensions(width: usize, height: usize) -> Result<usize> {
    match width.checked_mul(height) {
        Some(len) if len > 0 => Ok(len),
        _ => Err(ConfigError::dimensions(width, height)),
    }
}

/// Checks that `value` is a probability.
pub(crate) fn check_rate(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::rate(name, value))
    }
}
