use anyhow::Result;

use crate::model::clock::Clock;
use crate::model::config::AppConfig;
use crate::model::field::Field;
use crate::model::metrics::EpochMetrics;
use crate::ui::StatusLine;

pub struct App {
    /// Completed epochs; reporting only.
    pub epoch: u64,
    pub field: Field,
    pub clock: Clock,
    pub metrics: EpochMetrics,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;
        let field = Field::generate(&config.world)?;
        let clock = Clock::new(config.target_fps)?;

        Ok(Self {
            epoch: 0,
            field,
            clock,
            metrics: EpochMetrics::new(),
        })
    }

    pub fn status(&self) -> StatusLine {
        StatusLine {
            epoch: self.epoch,
            average_fps: self.metrics.average_fps(self.epoch),
        }
    }
}
