//! Predation table: what an eaten cell turns into.

use biotope_data::Cell;

pub trait CellLogic {
    /// Replacement for `eaten` after `self` eats it.
    fn eat(self, eaten: Cell) -> Cell;
}

impl CellLogic for Cell {
    fn eat(self, eaten: Cell) -> Cell {
        combine(self, eaten)
    }
}

/// Total over all pairs; anything not listed leaves `eaten` untouched.
pub fn combine(eater: Cell, eaten: Cell) -> Cell {
    match (eater, eaten) {
        (Cell::Plant, Cell::Food) => Cell::Food,
        (Cell::Virus, Cell::Food) => Cell::Virus,
        (Cell::Virus, Cell::Plant) => Cell::Virus,
        (Cell::Water, Cell::Virus) => Cell::Water,
        (Cell::Plant, Cell::Water) => Cell::Plant,
        (Cell::Water, Cell::Food) => Cell::Fungus,
        (Cell::Fungus, Cell::Fungus) => Cell::Fungus,
        (Cell::Plant, Cell::Fungus) => Cell::Plant,
        (Cell::Fungus, Cell::Plant) => Cell::Food,
        (_, eaten) => eaten,
    }
}
