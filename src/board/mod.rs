//! Board snapshots and the board diff engine.

#[allow(clippy::module_inception)]
pub mod board;
pub mod diff;

pub use board::{Board, BoardTile, PlacedTile};
pub use diff::{diff, propose, ProposedTile};
