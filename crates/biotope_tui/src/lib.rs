pub mod renderer;

pub use renderer::{draw_field, CellStyle, StatusLine};

use anyhow::Result;
use biotope_core::field::Field;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, SetAttribute},
    terminal::{Clear, ClearType},
};
use std::io::{self, Stdout, Write};

/// Restores default styling and wipes the screen and scrollback.
pub fn reset_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, SetAttribute(Attribute::Reset))?;
    clear_screen(out)
}

fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(
        out,
        Clear(ClearType::Purge),
        MoveTo(0, 0),
        Clear(ClearType::All)
    )?;
    out.flush()
}

/// Owns the output stream for the lifetime of the simulation.
pub struct Tui<W: Write = Stdout> {
    out: W,
    active: bool,
}

impl Tui<Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for Tui<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Tui<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out, active: false }
    }

    pub fn init(&mut self) -> Result<()> {
        clear_screen(&mut self.out)?;
        self.active = true;
        Ok(())
    }

    pub fn draw(&mut self, field: &Field, status: &StatusLine) -> Result<()> {
        draw_field(&mut self.out, field, Some(status))?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        if self.active {
            reset_terminal(&mut self.out)?;
            self.active = false;
        }
        Ok(())
    }

    pub fn writer(&self) -> &W {
        &self.out
    }
}

impl<W: Write> Drop for Tui<W> {
    fn drop(&mut self) {
        if self.active {
            let _ = reset_terminal(&mut self.out);
        }
    }
}
