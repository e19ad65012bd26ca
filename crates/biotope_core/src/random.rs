//! Random sources for the simulation.
//!
//! The field and the cell spawner each own a separate generator so the
//! choice of *what* spawns stays statistically independent from *whether*
//! and *where* things happen.

use biotope_data::Cell;
use rand::distributions::uniform::SampleUniform;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// ChaCha stream reserved for the cell spawner when both sources share a seed.
const SPAWNER_STREAM: u64 = 1;

/// Independent stateful generator of uniform reals and integers.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: ChaCha8Rng,
}

impl RandomSource {
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seeded on its own ChaCha stream, disjoint from [`RandomSource::seeded`].
    pub fn seeded_on_stream(seed: u64, stream: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(stream);
        Self { rng }
    }

    /// Uniform real in `[0, 1)`.
    pub fn random_double(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }

    /// `true` with probability `probability`.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.random_double() < probability
    }

    /// Uniform integer in `[min, max]`. Panics if `min > max`.
    pub fn random_int<T>(&mut self, min: T, max: T) -> T
    where
        T: SampleUniform + PartialOrd,
    {
        self.rng.gen_range(min..=max)
    }
}

/// Chooses the kind of each freshly spawned cell.
#[derive(Debug, Clone)]
pub struct CellSpawner {
    source: RandomSource,
}

impl CellSpawner {
    pub fn new(source: RandomSource) -> Self {
        Self { source }
    }

    pub fn from_entropy() -> Self {
        Self::new(RandomSource::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(RandomSource::seeded_on_stream(seed, SPAWNER_STREAM))
    }

    /// Uniform pick among the five living kinds. Never [`Cell::Dead`].
    pub fn random_cell(&mut self) -> Cell {
        let roll = self.source.random_int(1usize, Cell::LIVING.len());
        Cell::LIVING[roll - 1]
    }
}
