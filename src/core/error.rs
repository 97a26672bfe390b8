//! Closed set of rule and lookup errors.
//!
//! Every rejection the engine can produce is a variant here. Callers branch on
//! the variant (or its stable [`GameError::code`]) to build user-facing
//! messages. None of these are fatal: a rejected turn leaves the session
//! exactly as it was.

use thiserror::Error;

use super::entity::{Locale, SessionId};
use super::player::PlayerId;

/// Errors produced by the turn engine and session registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The proposed board places no new tiles.
    #[error("the proposed board does not place any tile")]
    NoChange,

    /// A placed tile lacks a usable position or letter.
    #[error("malformed tiles: {0}")]
    MalformedTiles(String),

    /// The first move of a session did not cover the center cell.
    #[error("the first move must cover the center cell")]
    MustUseCenter,

    /// None of the placed tiles touches a tile already on the board.
    #[error("no placed tile is adjacent to an existing tile")]
    NoAdjacent,

    /// The placed letters cannot be paid for from the player's rack.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// The placement forms no word of two or more letters.
    #[error("the placement forms no words")]
    NoWords,

    /// A formed word was not confirmed by the word validator.
    #[error("word `{0}` does not exist")]
    WordNotExist(String),

    /// Session state changed underneath a turn in a way validation cannot explain.
    #[error("internal conflict: {0}")]
    InternalConflict(String),

    #[error("owner {0} is not known to the player directory")]
    UnknownOwner(PlayerId),

    #[error("session {0} does not exist")]
    UnknownSession(SessionId),

    #[error("player {0} is not seated in this session")]
    UnknownPlayer(PlayerId),

    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),

    #[error("no tile set for locale `{0}`")]
    UnsupportedLocale(Locale),

    #[error("invalid setup: {0}")]
    InvalidSetup(String),
}

impl GameError {
    /// Stable kebab-case code for clients.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            GameError::NoChange => "no-change",
            GameError::MalformedTiles(_) => "malformed-tiles",
            GameError::MustUseCenter => "must-use-center",
            GameError::NoAdjacent => "no-adjacent",
            GameError::IllegalMove(_) => "illegal-move",
            GameError::NoWords => "no-words",
            GameError::WordNotExist(_) => "word-not-exist",
            GameError::InternalConflict(_) => "internal-conflict",
            GameError::UnknownOwner(_) => "unknown-owner",
            GameError::UnknownSession(_) => "unknown-session",
            GameError::UnknownPlayer(_) => "unknown-player",
            GameError::NotYourTurn(_) => "not-your-turn",
            GameError::UnsupportedLocale(_) => "unsupported-locale",
            GameError::InvalidSetup(_) => "invalid-setup",
        }
    }

    /// Rule violations a player can fix by submitting a different move.
    #[must_use]
    pub const fn is_rule_violation(&self) -> bool {
        matches!(
            self,
            GameError::NoChange
                | GameError::MalformedTiles(_)
                | GameError::MustUseCenter
                | GameError::NoAdjacent
                | GameError::IllegalMove(_)
                | GameError::NoWords
                | GameError::WordNotExist(_)
        )
    }
}
