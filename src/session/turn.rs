//! The turn pipeline.
//!
//! ```text
//! ownership -> validate -> extract -> score -> check words -> commit
//! ```
//!
//! Everything up to scoring is pure and runs in [`prepare_turn`]. Word
//! checks are the only suspension point ([`check_words`]); the session is
//! mutated only by [`Session::commit`](super::Session::commit) once every
//! word is confirmed, so a rejection at any stage leaves no trace.

use std::time::Duration;

use futures::future::join_all;
use tokio::time::timeout;
use tracing::{debug, warn};

use super::session::Session;
use crate::board::{Board, ProposedTile};
use crate::core::{GameError, Locale, PlayerId, Rack};
use crate::dictionary::WordValidator;
use crate::rules::{extract_words, score_turn, validate_placement, Word};

/// Pipeline stage a rejection came from, for logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnStage {
    Ownership,
    Validating,
    Extracting,
    CheckingWords,
    Committing,
}

impl TurnStage {
    /// Stage that produces `error`.
    #[must_use]
    pub fn of(error: &GameError) -> Self {
        match error {
            GameError::UnknownSession(_) | GameError::UnknownPlayer(_) | GameError::NotYourTurn(_) => {
                TurnStage::Ownership
            }
            GameError::NoWords => TurnStage::Extracting,
            GameError::WordNotExist(_) => TurnStage::CheckingWords,
            GameError::InternalConflict(_) => TurnStage::Committing,
            _ => TurnStage::Validating,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TurnStage::Ownership => "ownership",
            TurnStage::Validating => "validating",
            TurnStage::Extracting => "extracting",
            TurnStage::CheckingWords => "checking-words",
            TurnStage::Committing => "committing",
        }
    }
}

impl std::fmt::Display for TurnStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated and scored play that has not touched the session yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedTurn {
    pub player: PlayerId,
    /// `turn_total` of the session the turn was prepared against.
    pub base_turn_total: u64,
    pub old_board: Board,
    pub board: Board,
    pub rack_after: Rack,
    pub words: Vec<Word>,
    pub points: u32,
}

impl PreparedTurn {
    /// Distinct spellings to confirm with the word validator.
    pub fn texts(&self) -> Vec<String> {
        self.words.iter().map(|w| w.text.clone()).collect()
    }
}

/// Run every synchronous check for `player` proposing `proposed`.
pub fn prepare_turn(
    session: &Session,
    player: &PlayerId,
    proposed: &[ProposedTile],
) -> Result<PreparedTurn, GameError> {
    let seat = session.ensure_turn(player)?;
    let rack = &session.players()[seat].rack;
    let old_board = session.board();

    let placement = validate_placement(old_board, proposed, rack, session.tile_set(), session.rules())?;
    let board = old_board.with_placed(&placement.tiles)?;

    let extraction = extract_words(&board, &placement.tiles);
    if extraction.is_empty() {
        return Err(GameError::NoWords);
    }
    let config = session.config();
    let (words, points) = score_turn(
        &extraction,
        session.tile_set(),
        config.modifier_policy,
        config.wildcard_points,
    );

    debug!(
        session_id = %session.id(),
        player_id = %player,
        placed = placement.tiles.len(),
        words = words.len(),
        points,
        "turn prepared"
    );

    Ok(PreparedTurn {
        player: player.clone(),
        base_turn_total: session.turn_total(),
        old_board: old_board.clone(),
        board,
        rack_after: placement.rack_after,
        words,
        points,
    })
}

/// Confirm every word with `validator`, all lookups in flight at once.
///
/// A definitive "no", a lookup error and running out of time all reject the
/// turn with `word-not-exist`. On timeout the first word is reported.
pub async fn check_words(
    validator: &dyn WordValidator,
    locale: &Locale,
    words: &[String],
    limit: Duration,
) -> Result<(), GameError> {
    let lookups = words.iter().map(|word| async move { (word, validator.exists(locale, word).await) });

    let answers = match timeout(limit, join_all(lookups)).await {
        Ok(answers) => answers,
        Err(_) => {
            warn!(%locale, words = words.len(), timeout_ms = limit.as_millis() as u64, "word lookup timed out");
            let first = words.first().cloned().unwrap_or_default();
            return Err(GameError::WordNotExist(first));
        }
    };

    for (word, answer) in answers {
        match answer {
            Ok(true) => {}
            Ok(false) => return Err(GameError::WordNotExist(word.clone())),
            Err(err) => {
                warn!(%locale, word = %word, error = %err, "word lookup failed");
                return Err(GameError::WordNotExist(word.clone()));
            }
        }
    }
    Ok(())
}
