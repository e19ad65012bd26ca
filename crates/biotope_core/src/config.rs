//! Configuration management for simulation parameters.
//!
//! Strongly-typed configuration that maps to `config.toml`. Every field has a
//! default, so a partial file only overrides what it names.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! target_fps = 30
//!
//! [world]
//! width = 80
//! height = 24
//! eat_rate = 0.1
//! spawn_rate = 0.5
//! seed = 42
//! ```

use crate::error::{check_dimensions, check_rate, ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Field-level simulation configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    /// Field width in terminal columns.
    pub width: usize,
    /// Field height in terminal lines.
    pub height: usize,
    /// Probability that a cell eats a given neighbor during a sweep.
    pub eat_rate: f64,
    /// Probability of spawning one random cell after a sweep.
    pub spawn_rate: f64,
    /// Fixed seed for reproducible runs; OS entropy when absent.
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 30,
            eat_rate: 0.1,
            spawn_rate: 0.5,
            seed: None,
        }
    }
}

impl WorldConfig {
    pub fn validate(&self) -> Result<()> {
        check_dimensions(self.width, self.height)?;
        check_rate("eat_rate", self.eat_rate)?;
        check_rate("spawn_rate", self.spawn_rate)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub world: WorldConfig,
    /// Upper bound on simulated epochs per second.
    pub target_fps: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            target_fps: 60,
        }
    }
}

impl AppConfig {
    /// Loads and validates a config file. A missing file yields the defaults.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config = match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "No config file, using defaults");
                Self::default()
            }
            Err(e) => return Err(e.into()),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.target_fps == 0 {
            return Err(ConfigError::InvalidFrameRate(self.target_fps));
        }
        self.world.validate()
    }
}
