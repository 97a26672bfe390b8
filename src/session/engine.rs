//! The engine entry points.
//!
//! `GameEngine` ties the registry to its collaborators: the word validator,
//! the player directory and the tile distribution provider. All four are
//! injected, so several engines can run side by side in one process and tests
//! can swap any of them.
//!
//! ## Locking
//!
//! A play holds its session's lock from ownership check to commit, including
//! the dictionary round-trip. Turns of one session are therefore serialised,
//! while sessions never wait on each other.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::directory::PlayerDirectory;
use super::registry::{SessionHandle, SessionRegistry};
use super::session::Session;
use super::state::{GameState, TurnInfo, TurnReceipt};
use super::turn::{check_words, prepare_turn, TurnStage};
use crate::board::ProposedTile;
use crate::core::{EngineConfig, GameError, GameRng, Player, PlayerId, SessionId};
use crate::dictionary::WordValidator;
use crate::tiles::TileDistributionProvider;

/// A seat requested at session start.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatRequest {
    pub id: PlayerId,
    pub name: String,
}

impl SeatRequest {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: PlayerId::new(id),
            name: name.into(),
        }
    }
}

/// Runs sessions: begin, play, skip, end.
pub struct GameEngine {
    config: EngineConfig,
    registry: Arc<SessionRegistry>,
    validator: Arc<dyn WordValidator>,
    directory: Arc<dyn PlayerDirectory>,
    distributions: Arc<dyn TileDistributionProvider>,
    /// Master stream; each session gets a fork.
    rng: Mutex<GameRng>,
}

impl GameEngine {
    /// Create an engine with an empty registry.
    ///
    /// Fails with `invalid-setup` if `config` does not validate.
    pub fn new(
        config: EngineConfig,
        validator: Arc<dyn WordValidator>,
        directory: Arc<dyn PlayerDirectory>,
        distributions: Arc<dyn TileDistributionProvider>,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Ok(Self {
            config,
            registry: Arc::new(SessionRegistry::new()),
            validator,
            directory,
            distributions,
            rng: Mutex::new(rng),
        })
    }

    /// Use `registry` instead of a private one.
    #[must_use]
    pub fn with_registry(mut self, registry: Arc<SessionRegistry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn registry(&self) -> &Arc<SessionRegistry> {
        &self.registry
    }

    /// Start a session owned by `owner` with `seats` in random order.
    ///
    /// The owner's locale picks the tile set. Every seat gets a full rack.
    pub fn begin_session(
        &self,
        owner: &PlayerId,
        seats: Vec<SeatRequest>,
    ) -> Result<Arc<SessionHandle>, GameError> {
        let profile = self
            .directory
            .resolve(owner)
            .ok_or_else(|| GameError::UnknownOwner(owner.clone()))?;
        let tile_set = self
            .distributions
            .tile_set(&profile.locale)
            .ok_or_else(|| GameError::UnsupportedLocale(profile.locale.clone()))?;

        let players = seats.into_iter().map(|seat| Player::new(seat.id, seat.name)).collect();
        let rng = self.rng.lock().fork();
        let session = Session::start(
            SessionId::new(),
            owner.clone(),
            players,
            tile_set,
            self.config.clone(),
            rng,
        )?;

        let handle = self.registry.insert(session);
        info!(
            session_id = %handle.id(),
            owner = %owner,
            locale = %profile.locale,
            players = handle.roster().len(),
            "session started"
        );
        Ok(handle)
    }

    /// Run the full turn pipeline for `player` proposing `proposed`.
    ///
    /// On any error the session is unchanged and the same player may retry.
    pub async fn play_turn(
        &self,
        session_id: SessionId,
        player: &PlayerId,
        proposed: &[ProposedTile],
    ) -> Result<TurnReceipt, GameError> {
        let handle = self.session(session_id)?;
        if !handle.seats(player) {
            return Err(self.rejected(session_id, player, GameError::UnknownPlayer(player.clone())));
        }

        let mut session = handle.lock().await;
        let prepared = prepare_turn(&session, player, proposed)
            .map_err(|err| self.rejected(session_id, player, err))?;

        check_words(
            self.validator.as_ref(),
            session.locale(),
            &prepared.texts(),
            self.config.lookup_timeout,
        )
        .await
        .map_err(|err| self.rejected(session_id, player, err))?;

        let receipt = session
            .commit(prepared)
            .map_err(|err| self.rejected(session_id, player, err))?;

        info!(
            session_id = %session_id,
            player_id = %player,
            points = receipt.state.points(),
            turn_total = receipt.info.turn_total,
            bag = session.bag_size(),
            "turn committed"
        );
        Ok(receipt)
    }

    /// Pass `player`'s turn.
    pub async fn skip_turn(
        &self,
        session_id: SessionId,
        player: &PlayerId,
    ) -> Result<(GameState, TurnInfo), GameError> {
        let handle = self.session(session_id)?;
        let mut session = handle.lock().await;
        let skipped = session
            .skip(player)
            .map_err(|err| self.rejected(session_id, player, err))?;

        info!(
            session_id = %session_id,
            player_id = %player,
            turn_total = skipped.1.turn_total,
            "turn skipped"
        );
        Ok(skipped)
    }

    /// Discard a session and all of its state.
    pub fn end_session(&self, session_id: SessionId) -> Result<(), GameError> {
        match self.registry.remove(session_id) {
            Some(_) => {
                info!(session_id = %session_id, "session ended");
                Ok(())
            }
            None => Err(GameError::UnknownSession(session_id)),
        }
    }

    /// Handle of a live session.
    pub fn session(&self, session_id: SessionId) -> Result<Arc<SessionHandle>, GameError> {
        self.registry
            .get(session_id)
            .ok_or(GameError::UnknownSession(session_id))
    }

    /// The live session `player` is seated in.
    pub fn find_session(&self, player: &PlayerId) -> Option<Arc<SessionHandle>> {
        self.registry.find_by_player(player)
    }

    fn rejected(&self, session_id: SessionId, player: &PlayerId, err: GameError) -> GameError {
        let stage = TurnStage::of(&err);
        if err.is_rule_violation() {
            debug!(session_id = %session_id, player_id = %player, %stage, code = err.code(), "turn rejected");
        } else {
            warn!(session_id = %session_id, player_id = %player, %stage, code = err.code(), error = %err, "turn rejected");
        }
        err
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("config", &self.config)
            .field("sessions", &self.registry.len())
            .finish_non_exhaustive()
    }
}
