//! Epoch metrics and structured logging for the simulation.

use crate::field::Field;
use biotope_data::Cell;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_INTERVAL: u64 = 1000;

/// Tracks wall time since the simulation started.
#[derive(Debug, Clone)]
pub struct EpochMetrics {
    start_time: Instant,
    log_interval: u64,
}

impl Default for EpochMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl EpochMetrics {
    #[must_use]
    pub fn new() -> Self {
        Self::with_log_interval(DEFAULT_LOG_INTERVAL)
    }

    /// A zero interval disables the periodic summary.
    #[must_use]
    pub fn with_log_interval(log_interval: u64) -> Self {
        Self {
            start_time: Instant::now(),
            log_interval,
        }
    }

    /// Gets elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Completed epochs per second of wall time.
    #[must_use]
    pub fn average_fps(&self, epochs: u64) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            epochs as f64 / secs
        } else {
            0.0
        }
    }

    /// Records a finished epoch; logs a census summary every `log_interval` epochs.
    pub fn record_epoch(&self, epoch: u64, field: &Field) -> bool {
        if self.log_interval == 0 || epoch == 0 || epoch % self.log_interval != 0 {
            return false;
        }
        let census = field.census();
        tracing::info!(
            epoch,
            avg_fps = self.average_fps(epoch),
            food = census.count(Cell::Food),
            plant = census.count(Cell::Plant),
            virus = census.count(Cell::Virus),
            water = census.count(Cell::Water),
            fungus = census.count(Cell::Fungus),
            "Simulation epoch"
        );
        true
    }
}

/// Initialize tracing subscriber for logging.
///
/// Writes to stderr so log lines never land inside a rendered frame.
/// Level defaults to `warn` and follows `RUST_LOG` when set.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorldConfig;

    #[test]
    fn test_average_fps_zero_epochs() {
        let metrics = EpochMetrics::new();
        assert_eq!(metrics.average_fps(0), 0.0);
    }

    #[test]
    fn test_average_fps_positive() {
        let metrics = EpochMetrics::new();
        std::thread::sleep(Duration::from_millis(10));
        let fps = metrics.average_fps(5);
        assert!(fps > 0.0 && fps < 1000.0, "fps = {fps}");
    }

    #[test]
    fn test_record_epoch_interval() {
        let world = WorldConfig {
            width: 3,
            height: 3,
            seed: Some(1),
            ..WorldConfig::default()
        };
        let field = Field::generate(&world).unwrap();
        let metrics = EpochMetrics::with_log_interval(10);
        assert!(!metrics.record_epoch(0, &field));
        assert!(!metrics.record_epoch(9, &field));
        assert!(metrics.record_epoch(10, &field));
        assert!(!EpochMetrics::with_log_interval(0).record_epoch(10, &field));
    }
}
