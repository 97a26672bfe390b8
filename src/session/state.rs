//! Turn records.
//!
//! A [`GameState`] is appended to a session's history for every committed
//! turn and never changed afterwards. Index 0 of the history is the
//! [`TurnType::Start`] record with the empty board.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{PlayerId, Rack};
use crate::rules::Word;

/// Kind of a history entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnType {
    /// The initial empty board, recorded at session start.
    Start,
    /// A committed play.
    Normal,
    /// A committed pass.
    Skip,
}

/// What a committed turn achieved.
///
/// Skip and start records carry the empty default.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub valid: bool,
    pub points: u32,
    pub words: Vec<Word>,
}

impl Outcome {
    pub fn scored(words: Vec<Word>, points: u32) -> Self {
        Self {
            valid: true,
            points,
            words,
        }
    }
}

/// Immutable snapshot of one committed turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Acting player. `None` for the start record.
    pub player: Option<PlayerId>,
    /// Turn index after this record was committed.
    pub turn: usize,
    pub turn_type: TurnType,
    pub outcome: Outcome,
    pub old_board: Board,
    pub board: Board,
}

impl GameState {
    /// The start-of-session record.
    #[must_use]
    pub fn start() -> Self {
        Self {
            player: None,
            turn: 0,
            turn_type: TurnType::Start,
            outcome: Outcome::default(),
            old_board: Board::new(),
            board: Board::new(),
        }
    }

    /// Points this record added to its player's score.
    #[must_use]
    pub fn points(&self) -> u32 {
        self.outcome.points
    }
}

/// Whose turn it is after a commit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnInfo {
    pub turn_player: PlayerId,
    pub turn: usize,
    pub turn_total: u64,
}

/// Everything a successful play hands back to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReceipt {
    pub state: GameState,
    pub info: TurnInfo,
    /// The acting player's rack after paying and refilling.
    pub rack: Rack,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_record() {
        let start = GameState::start();
        assert_eq!(start.turn_type, TurnType::Start);
        assert!(start.player.is_none());
        assert!(start.board.is_empty());
        assert_eq!(start.points(), 0);
        assert!(!start.outcome.valid);
    }

    #[test]
    fn test_state_serializes() {
        let state = GameState {
            player: Some(PlayerId::new("p1")),
            turn: 1,
            turn_type: TurnType::Normal,
            outcome: Outcome::scored(Vec::new(), 12),
            old_board: Board::new(),
            board: Board::from_letters(&[(7, 7, 'A'), (8, 7, 'T')]),
        };
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
