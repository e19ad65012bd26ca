//! The cell field and its per-epoch update.
//!
//! An epoch is a single row-major sweep over one in-place buffer: every cell
//! gets a chance to eat each of its orthogonal neighbors, and a write made
//! early in the sweep is what later cells see. After the sweep at most one
//! random cell is spawned.

use crate::combination::CellLogic;
use crate::config::WorldConfig;
use crate::error::{check_dimensions, check_rate, ConfigError, Result};
use crate::random::{CellSpawner, RandomSource};
use biotope_data::Cell;
use std::slice::ChunksExact;

/// Neighbor visiting order: north, west, south, east.
///
/// The order only decides which random draw each neighbor consumes. The
/// eater is never rewritten by its own call, so any order applies the same
/// rule; this one keeps seeded runs matching the classic C++ simulator.
const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// A cell written by [`Field::spawn_random_cell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawn {
    pub row: usize,
    pub col: usize,
    pub cell: Cell,
}

/// Number of cells of each kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Census {
    counts: [usize; Cell::COUNT],
}

impl Census {
    pub fn count(&self, cell: Cell) -> usize {
        self.counts[cell.ordinal()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cell, usize)> + '_ {
        Cell::ALL.iter().map(|&cell| (cell, self.count(cell)))
    }
}

#[derive(Debug, Clone)]
pub struct Field {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
    eat_rate: f64,
    spawn_rate: f64,
    rng: RandomSource,
    spawner: CellSpawner,
}

impl Field {
    /// An all-[`Cell::Dead`] field driven by the given sources.
    pub fn with_sources(
        width: usize,
        height: usize,
        eat_rate: f64,
        spawn_rate: f64,
        rng: RandomSource,
        spawner: CellSpawner,
    ) -> Result<Self> {
        let len = check_dimensions(width, height)?;
        check_rate("eat_rate", eat_rate)?;
        check_rate("spawn_rate", spawn_rate)?;

        Ok(Self {
            cells: vec![Cell::Dead; len],
            width,
            height,
            eat_rate,
            spawn_rate,
            rng,
            spawner,
        })
    }

    /// An all-[`Cell::Dead`] field; sources are seeded from `world.seed` or OS entropy.
    pub fn new(world: &WorldConfig) -> Result<Self> {
        let (rng, spawner) = match world.seed {
            Some(seed) => (RandomSource::seeded(seed), CellSpawner::seeded(seed)),
            None => (RandomSource::from_entropy(), CellSpawner::from_entropy()),
        };
        Self::with_sources(
            world.width,
            world.height,
            world.eat_rate,
            world.spawn_rate,
            rng,
            spawner,
        )
    }

    /// A field where every cell is an independent living pick.
    pub fn generate(world: &WorldConfig) -> Result<Self> {
        let mut field = Self::new(world)?;
        field.fill_random();
        tracing::info!(
            width = field.width,
            height = field.height,
            seeded = world.seed.is_some(),
            "Generated random field"
        );
        Ok(field)
    }

    /// Builds a field from explicit rows, which must all share one width.
    pub fn from_rows(
        rows: Vec<Vec<Cell>>,
        eat_rate: f64,
        spawn_rate: f64,
        rng: RandomSource,
        spawner: CellSpawner,
    ) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut field = Self::with_sources(width, height, eat_rate, spawn_rate, rng, spawner)?;

        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != width {
                return Err(ConfigError::RaggedGrid {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
            let start = field.index(row, 0);
            field.cells[start..start + width].copy_from_slice(&cells);
        }
        Ok(field)
    }

    /// Overwrites every cell with a fresh pick from the spawner.
    pub fn fill_random(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = self.spawner.random_cell();
        }
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.height && col < self.width).then(|| self.cells[self.index(row, col)])
    }

    /// Returns `false` and leaves the field untouched when out of range.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        if row >= self.height || col >= self.width {
            return false;
        }
        let idx = self.index(row, col);
        self.cells[idx] = cell;
        true
    }

    /// Rows from top to bottom, each exactly `width` cells long.
    pub fn rows(&self) -> ChunksExact<'_, Cell> {
        self.cells.chunks_exact(self.width)
    }

    pub fn census(&self) -> Census {
        let mut census = Census::default();
        for cell in &self.cells {
            census.counts[cell.ordinal()] += 1;
        }
        census
    }

    fn neighbor(&self, row: usize, col: usize, offset: (isize, isize)) -> Option<(usize, usize)> {
        let r = row.checked_add_signed(offset.0)?;
        let c = col.checked_add_signed(offset.1)?;
        (r < self.height && c < self.width).then_some((r, c))
    }

    /// Lets the cell at `(row, col)` try to eat each in-bounds neighbor.
    ///
    /// Each neighbor is eaten independently with probability `eat_rate` and
    /// replaced by the predation result. Missing neighbors consume no draw.
    /// The eater itself is never changed; an out-of-range position is a no-op.
    pub fn process_cell(&mut self, row: usize, col: usize) {
        let Some(eater) = self.get(row, col) else {
            return;
        };

        for offset in NEIGHBOR_OFFSETS {
            let Some((nr, nc)) = self.neighbor(row, col, offset) else {
                continue;
            };
            if self.rng.chance(self.eat_rate) {
                let idx = self.index(nr, nc);
                self.cells[idx] = eater.eat(self.cells[idx]);
            }
        }
    }

    /// Runs one epoch. Returns the spawned cell, if any.
    pub fn process_all_cells(&mut self) -> Option<Spawn> {
        for row in 0..self.height {
            for col in 0..self.width {
                self.process_cell(row, col);
            }
        }

        if self.rng.chance(self.spawn_rate) {
            Some(self.spawn_random_cell())
        } else {
            None
        }
    }

    /// Overwrites a uniformly chosen position with a living cell.
    pub fn spawn_random_cell(&mut self) -> Spawn {
        let row = self.rng.random_int(0, self.height - 1);
        let col = self.rng.random_int(0, self.width - 1);
        let cell = self.spawner.random_cell();

        let idx = self.index(row, col);
        self.cells[idx] = cell;
        tracing::trace!(row, col, ?cell, "Spawned cell");
        Spawn { row, col, cell }
    }
}
