use serde::{Deserialize, Serialize};

/// Kind of organism occupying a single field cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Dead,
    Food,
    Plant,
    Virus,
    Water,
    Fungus,
}

impl Cell {
    pub const COUNT: usize = 6;

    /// Every variant, in declaration order.
    pub const ALL: [Cell; Cell::COUNT] = [
        Cell::Dead,
        Cell::Food,
        Cell::Plant,
        Cell::Virus,
        Cell::Water,
        Cell::Fungus,
    ];

    /// Variants that can be spawned, in spawn-roll order (1..=5).
    pub const LIVING: [Cell; 5] = [
        Cell::Plant,
        Cell::Virus,
        Cell::Food,
        Cell::Water,
        Cell::Fungus,
    ];

    /// Stable position of the variant inside [`Cell::ALL`].
    pub fn ordinal(self) -> usize {
        match self {
            Cell::Dead => 0,
            Cell::Food => 1,
            Cell::Plant => 2,
            Cell::Virus => 3,
            Cell::Water => 4,
            Cell::Fungus => 5,
        }
    }
}
