pub mod macros;

use biotope_lib::model::field::Field;
use biotope_lib::model::random::{CellSpawner, RandomSource};
use biotope_lib::model::Cell;
use biotope_lib::ui::CellStyle;

/// Inverse of [`CellStyle::symbol`].
pub fn cell_from_symbol(symbol: char) -> Cell {
    Cell::ALL
        .into_iter()
        .find(|cell| cell.symbol() == symbol)
        .unwrap_or_else(|| panic!("No cell is drawn as {symbol:?}"))
}

/// The field as one glyph string per row.
pub fn snapshot(field: &Field) -> Vec<String> {
    field
        .rows()
        .map(|row| row.iter().map(CellStyle::symbol).collect())
        .collect()
}

#[allow(dead_code)]
pub struct FieldBuilder {
    rows: Vec<Vec<Cell>>,
    eat_rate: f64,
    spawn_rate: f64,
    seed: u64,
}

#[allow(dead_code)]
impl FieldBuilder {
    /// Nothing eats and nothing spawns until rates are raised.
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            eat_rate: 0.0,
            spawn_rate: 0.0,
            seed: 42,
        }
    }

    /// Appends a row written in renderer glyphs, e.g. `"$.~"`.
    pub fn row(mut self, glyphs: &str) -> Self {
        self.rows.push(glyphs.chars().map(cell_from_symbol).collect());
        self
    }

    pub fn filled(mut self, width: usize, height: usize, cell: Cell) -> Self {
        self.rows = vec![vec![cell; width]; height];
        self
    }

    pub fn eat_rate(mut self, rate: f64) -> Self {
        self.eat_rate = rate;
        self
    }

    pub fn spawn_rate(mut self, rate: f64) -> Self {
        self.spawn_rate = rate;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self) -> Field {
        Field::from_rows(
            self.rows,
            self.eat_rate,
            self.spawn_rate,
            RandomSource::seeded(self.seed),
            CellSpawner::seeded(self.seed),
        )
        .expect("Failed to build field")
    }
}
