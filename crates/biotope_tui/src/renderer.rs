use biotope_core::field::Field;
use biotope_data::Cell;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::fmt;
use std::io::{self, Write};

pub trait CellStyle {
    fn symbol(&self) -> char;
    fn color(&self) -> Option<Color>;
}

impl CellStyle for Cell {
    fn symbol(&self) -> char {
        match self {
            Cell::Dead => ' ',
            Cell::Food => '.',
            Cell::Plant => '$',
            Cell::Water => '~',
            Cell::Virus => '*',
            Cell::Fungus => '%',
        }
    }

    fn color(&self) -> Option<Color> {
        match self {
            Cell::Dead | Cell::Food => None,
            Cell::Plant => Some(Color::DarkGreen),
            Cell::Water => Some(Color::DarkBlue),
            Cell::Virus => Some(Color::DarkRed),
            Cell::Fungus => Some(Color::DarkMagenta),
        }
    }
}

/// Line printed under the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusLine {
    pub epoch: u64,
    pub average_fps: f64,
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Epoch: {}, average FPS: {:.1}",
            self.epoch, self.average_fps
        )
    }
}

fn draw_cell<W: Write>(out: &mut W, cell: Cell) -> io::Result<()> {
    match cell.color() {
        Some(color) => queue!(
            out,
            SetForegroundColor(color),
            Print(cell.symbol()),
            ResetColor
        ),
        None => queue!(out, Print(cell.symbol())),
    }
}

/// Draws one frame from the top-left corner and flushes once.
pub fn draw_field<W: Write>(
    out: &mut W,
    field: &Field,
    status: Option<&StatusLine>,
) -> io::Result<()> {
    queue!(out, MoveTo(0, 0))?;
    for row in field.rows() {
        for &cell in row {
            draw_cell(out, cell)?;
        }
        queue!(out, Print('\n'))?;
    }
    if let Some(status) = status {
        queue!(out, Print(status), Print('\n'))?;
    }
    out.flush()
}
