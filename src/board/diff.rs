//! Client-proposed boards and the diff against the last committed board.
//!
//! Proposed tiles arrive straight from clients, so every field is optional.
//! The diff keeps tiles it cannot place (no position) instead of dropping
//! them; placement validation then rejects the whole turn as malformed.

use serde::{Deserialize, Serialize};

use super::board::Board;
use crate::core::Position;

/// A tile as submitted by a client.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposedTile {
    #[serde(default)]
    pub letter: Option<String>,
    #[serde(default, rename = "pos")]
    pub position: Option<Position>,
}

impl ProposedTile {
    /// A well-formed tile.
    pub fn new(x: i32, y: i32, letter: impl Into<String>) -> Self {
        Self {
            letter: Some(letter.into()),
            position: Some(Position::new(x, y)),
        }
    }
}

/// Build a proposed board holding `board` plus `extra` tiles.
///
/// Mirrors what a client sends: the whole board, not just the new tiles.
pub fn propose(board: &Board, extra: &[(i32, i32, char)]) -> Vec<ProposedTile> {
    board
        .iter()
        .map(|(p, t)| ProposedTile::new(p.x, p.y, t.letter.to_string()))
        .chain(extra.iter().map(|&(x, y, c)| ProposedTile::new(x, y, c.to_string())))
        .collect()
}

/// Tiles of `proposed` that are not on `previous`.
///
/// Tiles without a position are always part of the diff. An empty previous
/// board yields the whole proposal; an empty proposal yields nothing.
pub fn diff<'a>(previous: &Board, proposed: &'a [ProposedTile]) -> Vec<&'a ProposedTile> {
    proposed
        .iter()
        .filter(|tile| match tile.position {
            Some(position) => !previous.is_occupied(position),
            None => true,
        })
        .collect()
}
