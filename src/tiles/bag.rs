//! The shared pool of undrawn tiles.
//!
//! Draws are uniform and without replacement: a random index into the live
//! list is chosen and the tile is swap-removed, so the list stays compact and
//! an index can never point past the end.

use crate::core::{GameRng, RackTile};

/// Multiset of undrawn tiles with its own random stream.
#[derive(Clone, Debug)]
pub struct TileBag {
    tiles: Vec<RackTile>,
    rng: GameRng,
}

impl TileBag {
    /// Create a bag holding `tiles`.
    #[must_use]
    pub fn new(tiles: Vec<RackTile>, rng: GameRng) -> Self {
        Self { tiles, rng }
    }

    /// Remaining tile count.
    #[must_use]
    pub fn size(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Remove and return one random tile, or `None` when empty.
    pub fn draw_one(&mut self) -> Option<RackTile> {
        if self.tiles.is_empty() {
            return None;
        }
        let index = self.rng.gen_range_usize(0..self.tiles.len());
        Some(self.tiles.swap_remove(index))
    }

    /// Remove and return up to `n` random tiles, stopping early if the bag empties.
    pub fn draw(&mut self, n: usize) -> Vec<RackTile> {
        let mut drawn = Vec::with_capacity(n.min(self.tiles.len()));
        while drawn.len() < n {
            match self.draw_one() {
                Some(tile) => drawn.push(tile),
                None => break,
            }
        }
        drawn
    }

    /// View the remaining tiles (unordered).
    #[must_use]
    pub fn tiles(&self) -> &[RackTile] {
        &self.tiles
    }
}
