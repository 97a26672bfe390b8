//! Word extraction from the post-move board.
//!
//! For every newly placed tile and each axis, walk backwards to the start of
//! the occupied run, then forwards collecting the run. A run becomes a word
//! when it has at least two letters and contains a tile placed this turn.
//! Words are de-duplicated by spelling within a turn.
//!
//! A single placed tile may complete one horizontal and one vertical word in
//! the same turn; both count.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::board::{Board, PlacedTile};
use crate::core::{Axis, Letter, Position};

/// A tile of a formed word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordTile {
    pub position: Position,
    pub letter: Letter,
    pub blank: bool,
    /// Placed during the current turn.
    pub fresh: bool,
}

/// A run of tiles spelling a word.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedWord {
    pub text: String,
    pub axis: Axis,
    pub tiles: Vec<WordTile>,
}

/// All words a move formed, in discovery order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extraction {
    pub words: Vec<ExtractedWord>,
}

impl Extraction {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Distinct spellings, for the word validator.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| w.text.as_str())
    }
}

/// Extract every word touched by `placed` on `board` (the board after the move).
pub fn extract_words(board: &Board, placed: &[PlacedTile]) -> Extraction {
    let fresh: FxHashSet<Position> = placed.iter().map(|t| t.position).collect();
    let mut seen = FxHashSet::default();
    let mut words = Vec::new();

    for tile in placed {
        for axis in Axis::ALL {
            let Some(word) = run_through(board, tile.position, axis, &fresh) else {
                continue;
            };
            if seen.insert(word.text.clone()) {
                words.push(word);
            }
        }
    }

    Extraction { words }
}

/// The qualifying run through `anchor` along `axis`, if any.
fn run_through(
    board: &Board,
    anchor: Position,
    axis: Axis,
    fresh: &FxHashSet<Position>,
) -> Option<ExtractedWord> {
    let mut start = anchor;
    while board.is_occupied(start.backward(axis)) {
        start = start.backward(axis);
    }

    let mut tiles = Vec::new();
    let mut cursor = start;
    while let Some(tile) = board.get(cursor) {
        tiles.push(WordTile {
            position: cursor,
            letter: tile.letter,
            blank: tile.blank,
            fresh: fresh.contains(&cursor),
        });
        cursor = cursor.forward(axis);
    }

    if tiles.len() < 2 || !tiles.iter().any(|t| t.fresh) {
        return None;
    }

    let text = tiles.iter().map(|t| t.letter.as_char()).collect();
    Some(ExtractedWord { text, axis, tiles })
}
