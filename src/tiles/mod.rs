//! Tile sets and the tile bag.
//!
//! - `distribution`: locale tile sets and the provider boundary
//! - `bag`: draw-without-replacement pool

pub mod bag;
pub mod distribution;

pub use bag::TileBag;
pub use distribution::{english, StandardDistributions, TileDistributionProvider, TileSet};
