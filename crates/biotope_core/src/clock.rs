//! Frame pacing for the simulation loop.

use crate::error::{ConfigError, Result};
use std::thread;
use std::time::{Duration, Instant};

/// Enforces a minimum wall-clock spacing between epochs.
///
/// Each [`Clock::tick`] only looks at the previous tick. An epoch that ran
/// long is not paid back by shorter waits afterwards.
#[derive(Debug, Clone)]
pub struct Clock {
    max_fps: u32,
    frame_interval: Duration,
    last_tick: Option<Instant>,
}

impl Clock {
    pub fn new(max_fps: u32) -> Result<Self> {
        if max_fps == 0 {
            return Err(ConfigError::InvalidFrameRate(max_fps));
        }
        Ok(Self {
            max_fps,
            frame_interval: Duration::from_secs_f64(1.0 / f64::from(max_fps)),
            last_tick: None,
        })
    }

    pub fn max_fps(&self) -> u32 {
        self.max_fps
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Sleeps out whatever remains of the frame interval since the previous
    /// tick, then stamps the current instant. Returns the time slept.
    ///
    /// The first tick never sleeps.
    pub fn tick(&mut self) -> Duration {
        let remaining = self
            .last_tick
            .and_then(|last| self.frame_interval.checked_sub(last.elapsed()))
            .unwrap_or(Duration::ZERO);

        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
        self.last_tick = Some(Instant::now());
        remaining
    }
}
