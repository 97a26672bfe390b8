//! Board snapshots.
//!
//! A `Board` maps occupied positions to tiles. It is backed by `im::OrdMap`,
//! so every committed turn can keep its own snapshot in the session history
//! while sharing structure with its predecessor.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use crate::core::{GameError, Letter, Position};

/// A tile fixed on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardTile {
    pub letter: Letter,
    /// Placed from a wildcard; `letter` is the letter it stands for.
    pub blank: bool,
}

/// A validated tile placed this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedTile {
    pub position: Position,
    pub letter: Letter,
    pub blank: bool,
}

impl PlacedTile {
    /// A regular (non-wildcard) placement.
    #[must_use]
    pub fn new(position: Position, letter: Letter) -> Self {
        Self {
            position,
            letter,
            blank: false,
        }
    }

    #[must_use]
    pub fn tile(&self) -> BoardTile {
        BoardTile {
            letter: self.letter,
            blank: self.blank,
        }
    }
}

/// Immutable-by-convention snapshot of the board.
///
/// No two tiles can share a position: the map key enforces it. Serializes as
/// a list of placed tiles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<PlacedTile>", into = "Vec<PlacedTile>")]
pub struct Board {
    cells: OrdMap<Position, BoardTile>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from `(x, y, letter)` triples. Later duplicates win.
    ///
    /// ```
    /// use wordgrid::board::Board;
    /// use wordgrid::core::Position;
    ///
    /// let board = Board::from_letters(&[(7, 7, 'C'), (8, 7, 'A'), (9, 7, 'T')]);
    /// assert_eq!(board.len(), 3);
    /// assert_eq!(board.get(Position::new(8, 7)).unwrap().letter.as_char(), 'A');
    /// ```
    #[must_use]
    pub fn from_letters(tiles: &[(i32, i32, char)]) -> Self {
        let cells = tiles
            .iter()
            .map(|&(x, y, c)| {
                (
                    Position::new(x, y),
                    BoardTile {
                        letter: Letter::new(c),
                        blank: false,
                    },
                )
            })
            .collect();
        Self { cells }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of tiles on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn get(&self, position: Position) -> Option<&BoardTile> {
        self.cells.get(&position)
    }

    #[must_use]
    pub fn is_occupied(&self, position: Position) -> bool {
        self.cells.contains_key(&position)
    }

    /// Check whether any orthogonal neighbour of `position` is occupied.
    #[must_use]
    pub fn touches(&self, position: Position) -> bool {
        position.neighbors().iter().any(|&n| self.is_occupied(n))
    }

    /// Iterate over occupied cells in position order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &BoardTile)> {
        self.cells.iter().map(|(&p, t)| (p, t))
    }

    /// Return a new snapshot with `placed` added.
    ///
    /// Fails with `internal-conflict` if any target cell is already occupied;
    /// validation guarantees it is not, so a failure here means the snapshot
    /// changed underneath the turn.
    pub fn with_placed(&self, placed: &[PlacedTile]) -> Result<Board, GameError> {
        let mut cells = self.cells.clone();
        for tile in placed {
            if cells.insert(tile.position, tile.tile()).is_some() {
                return Err(GameError::InternalConflict(format!(
                    "cell {} is already occupied",
                    tile.position
                )));
            }
        }
        Ok(Board { cells })
    }
}

impl From<Vec<PlacedTile>> for Board {
    fn from(tiles: Vec<PlacedTile>) -> Self {
        let cells = tiles.into_iter().map(|t| (t.position, t.tile())).collect();
        Self { cells }
    }
}

impl From<Board> for Vec<PlacedTile> {
    fn from(board: Board) -> Self {
        board
            .iter()
            .map(|(position, tile)| PlacedTile {
                position,
                letter: tile.letter,
                blank: tile.blank,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::new();
        assert!(board.is_empty());
        assert_eq!(board.len(), 0);
        assert!(!board.touches(Position::new(7, 7)));
    }

    #[test]
    fn test_with_placed_shares_history() {
        let before = Board::from_letters(&[(7, 7, 'A')]);
        let after = before
            .with_placed(&[PlacedTile::new(Position::new(8, 7), Letter::new('T'))])
            .unwrap();

        assert_eq!(before.len(), 1);
        assert_eq!(after.len(), 2);
        assert!(after.is_occupied(Position::new(8, 7)));
        assert!(!before.is_occupied(Position::new(8, 7)));
    }

    #[test]
    fn test_with_placed_conflict() {
        let board = Board::from_letters(&[(7, 7, 'A')]);
        let err = board
            .with_placed(&[PlacedTile::new(Position::new(7, 7), Letter::new('B'))])
            .unwrap_err();
        assert_eq!(err.code(), "internal-conflict");
    }

    #[test]
    fn test_touches() {
        let board = Board::from_letters(&[(7, 7, 'A')]);
        assert!(board.touches(Position::new(7, 8)));
        assert!(board.touches(Position::new(6, 7)));
        assert!(!board.touches(Position::new(8, 8)));
    }

    #[test]
    fn test_serialization() {
        let board = Board::from_letters(&[(7, 7, 'A'), (7, 8, 'X')]);
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
