use std::fmt::{Display, Formatter};

use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::tile::{PipValue, Tile};

/// Reasons the pool cannot satisfy a draw.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SupplyError {
    /// More tiles were requested than remain in the pool.
    InsufficientSupply {
        /// How many tiles the draw asked for.
        requested: usize,
        /// How many tiles were actually left.
        remaining: usize,
    },
}

impl Display for SupplyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientSupply {
                requested,
                remaining,
            } => {
                write!(f, "requested {requested} tiles but only {remaining} remain")
            }
        }
    }
}

impl std::error::Error for SupplyError {}

/// The bag of undrawn tiles for one game.
///
/// Generated once for a pip value range, then consumed by uniform
/// without-replacement draws.
pub struct Pool {
    tiles: Vec<Tile>,
    rng: StdRng,
}

impl Pool {
    /// Build the full tile set for pip values in `[min_value, max_value]`:
    /// one double per value plus one standard tile per unordered pair of
    /// distinct values. The usual double-six range `[0, 6]` yields 28 tiles.
    pub fn generate(min_value: PipValue, max_value: PipValue) -> Self {
        Self::with_rng(min_value, max_value, StdRng::from_os_rng())
    }

    /// As [`generate`](Self::generate), but seeded so draws are reproducible.
    pub fn seeded(min_value: PipValue, max_value: PipValue, seed: u64) -> Self {
        Self::with_rng(min_value, max_value, StdRng::seed_from_u64(seed))
    }

    fn with_rng(min_value: PipValue, max_value: PipValue, rng: StdRng) -> Self {
        let mut tiles = (min_value..=max_value).map(Tile::double).collect_vec();
        tiles.extend(
            (min_value..=max_value)
                .tuple_combinations::<(_, _)>()
                .map(|(first, second)| Tile::standard(first, second)),
        );
        Self { tiles, rng }
    }

    /// Tiles not yet drawn.
    pub fn remaining(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the pool is exhausted.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Draw `count` tiles uniformly at random, without replacement.
    ///
    /// # Errors
    ///
    /// [`SupplyError::InsufficientSupply`] if fewer than `count` tiles
    /// remain; the pool is left untouched.
    pub fn draw(&mut self, count: usize) -> Result<Vec<Tile>, SupplyError> {
        if count > self.tiles.len() {
            return Err(SupplyError::InsufficientSupply {
                requested: count,
                remaining: self.tiles.len(),
            });
        }

        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count {
            let index = self.rng.random_range(0..self.tiles.len());
            drawn.push(self.tiles.swap_remove(index));
        }

        debug!(count, remaining = self.tiles.len(), "drew from pool");
        Ok(drawn)
    }

    /// Draw a single tile; see [`draw`](Self::draw).
    ///
    /// # Errors
    ///
    /// [`SupplyError::InsufficientSupply`] if the pool is empty.
    pub fn draw_one(&mut self) -> Result<Tile, SupplyError> {
        self.draw(1)?.pop().ok_or(SupplyError::InsufficientSupply {
            requested: 1,
            remaining: 0,
        })
    }
}
