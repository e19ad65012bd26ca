//! # Biotope Core
//!
//! The simulation engine for Biotope, a terminal cellular ecosystem.
//!
//! A fixed grid of [`Cell`]s evolves one epoch at a time. Every cell may eat
//! its orthogonal neighbors according to a closed predation table, and a
//! random living cell is occasionally spawned. A [`clock::Clock`] keeps the
//! epoch rate under a configured ceiling.
//!
//! ## Example
//!
//! ```
//! use biotope_core::config::WorldConfig;
//! use biotope_core::field::Field;
//!
//! let world = WorldConfig {
//!     width: 16,
//!     height: 8,
//!     seed: Some(42),
//!     ..WorldConfig::default()
//! };
//! let mut field = Field::generate(&world).unwrap();
//! field.process_all_cells();
//! assert_eq!(field.rows().len(), 8);
//! ```

/// Frame pacing between epochs
pub mod clock;
/// Predation table between cell kinds
pub mod combination;
/// Configuration management for simulation parameters
pub mod config;
/// Configuration errors
pub mod error;
/// Grid storage and the per-epoch sweep
pub mod field;
/// Epoch metrics and structured logging
pub mod metrics;
/// Seedable random sources
pub mod random;

pub use biotope_data::Cell;
pub use combination::{combine, CellLogic};
pub use error::ConfigError;
pub use metrics::{init_logging, EpochMetrics};
