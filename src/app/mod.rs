pub mod shutdown;
pub mod state;

pub use shutdown::ShutdownManager;
pub use state::App;

use anyhow::Result;
use std::io::Write;

use crate::model::field::{Census, Spawn};
use crate::ui::Tui;

impl App {
    /// Paces, then sweeps the field once.
    pub fn step(&mut self) -> Option<Spawn> {
        self.clock.tick();
        self.field.process_all_cells()
    }

    fn finish_epoch(&mut self) {
        self.epoch += 1;
        self.metrics.record_epoch(self.epoch, &self.field);
    }

    /// One paced epoch followed by a rendered frame.
    pub fn frame<W: Write>(&mut self, tui: &mut Tui<W>) -> Result<()> {
        self.step();
        tui.draw(&self.field, &self.status())?;
        self.finish_epoch();
        Ok(())
    }

    /// Renders forever; only a process signal or an I/O error ends it.
    pub fn run<W: Write>(&mut self, tui: &mut Tui<W>) -> Result<()> {
        loop {
            self.frame(tui)?;
        }
    }

    /// Sweeps `epochs` times with no pacing or rendering.
    pub fn run_headless(&mut self, epochs: u64) -> Census {
        for _ in 0..epochs {
            self.field.process_all_cells();
            self.finish_epoch();
        }
        self.field.census()
    }
}
