//! A single match: seats, bag, turn pointer and history.
//!
//! `Session` is plain owned data. The registry wraps it in a per-session lock;
//! the mutating methods here assume the caller holds that lock and that the
//! turn they commit was prepared against the current state.

use std::sync::Arc;

use im::Vector;
use rustc_hash::FxHashSet;
use tracing::debug;

use super::state::{GameState, Outcome, TurnInfo, TurnReceipt, TurnType};
use super::turn::PreparedTurn;
use crate::board::Board;
use crate::core::{EngineConfig, GameError, GameRng, Locale, Player, PlayerId, SessionId};
use crate::rules::BoardRules;
use crate::tiles::{TileBag, TileSet};

/// One in-progress match.
#[derive(Clone, Debug)]
pub struct Session {
    id: SessionId,
    locale: Locale,
    owner: PlayerId,
    /// Seats in turn order.
    players: Vec<Player>,
    turn: usize,
    turn_total: u64,
    history: Vector<GameState>,
    /// Board of the latest history record.
    board: Board,
    bag: TileBag,
    tile_set: Arc<TileSet>,
    config: EngineConfig,
}

impl Session {
    /// Seat `players` in random order, fill the bag and deal every rack.
    ///
    /// Turn order and bag draws use separate streams of `rng`.
    pub fn start(
        id: SessionId,
        owner: PlayerId,
        mut players: Vec<Player>,
        tile_set: Arc<TileSet>,
        config: EngineConfig,
        rng: GameRng,
    ) -> Result<Self, GameError> {
        if players.is_empty() {
            return Err(GameError::InvalidSetup("a session needs at least one player".into()));
        }
        let mut seen = FxHashSet::default();
        if let Some(dup) = players.iter().find(|p| !seen.insert(&p.id)) {
            return Err(GameError::InvalidSetup(format!("player {} is seated twice", dup.id)));
        }

        rng.for_context("turn-order").shuffle(&mut players);
        let mut bag = TileBag::new(tile_set.full_distribution(), rng.for_context("bag"));
        for player in &mut players {
            player.rack = bag.draw(config.rack_size).into_iter().collect();
        }

        debug!(
            session_id = %id,
            players = players.len(),
            bag = bag.size(),
            "session dealt"
        );

        Ok(Self {
            id,
            locale: tile_set.locale().clone(),
            owner,
            players,
            turn: 0,
            turn_total: 0,
            history: im::vector![GameState::start()],
            board: Board::new(),
            bag,
            tile_set,
            config,
        })
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn owner(&self) -> &PlayerId {
        &self.owner
    }

    /// Seats in turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look up a seated player by id.
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    /// Index of the player whose turn it is.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Committed turns so far, plays and skips alike.
    pub fn turn_total(&self) -> u64 {
        self.turn_total
    }

    /// The player whose turn it is.
    pub fn turn_player(&self) -> &Player {
        &self.players[self.turn]
    }

    pub fn turn_info(&self) -> TurnInfo {
        TurnInfo {
            turn_player: self.turn_player().id.clone(),
            turn: self.turn,
            turn_total: self.turn_total,
        }
    }

    /// Committed board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &Vector<GameState> {
        &self.history
    }

    pub fn bag_size(&self) -> usize {
        self.bag.size()
    }

    pub fn tile_set(&self) -> &TileSet {
        &self.tile_set
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub(crate) fn rules(&self) -> BoardRules {
        BoardRules {
            board_size: self.config.board_size,
            center: self.config.center,
        }
    }

    /// Tiles currently accounted for: bag, racks and board.
    ///
    /// Always equals the tile set's total.
    pub fn tiles_in_play(&self) -> usize {
        self.bag.size() + self.players.iter().map(|p| p.rack.len()).sum::<usize>() + self.board().len()
    }

    /// Index of `player` if it is their turn.
    pub fn ensure_turn(&self, player: &PlayerId) -> Result<usize, GameError> {
        match self.players.iter().position(|p| &p.id == player) {
            None => Err(GameError::UnknownPlayer(player.clone())),
            Some(seat) if seat != self.turn => Err(GameError::NotYourTurn(player.clone())),
            Some(seat) => Ok(seat),
        }
    }

    /// Apply a prepared play: pay, refill, score, record and advance.
    ///
    /// Fails with `internal-conflict` if the session moved on since the turn
    /// was prepared.
    pub fn commit(&mut self, prepared: PreparedTurn) -> Result<TurnReceipt, GameError> {
        if prepared.base_turn_total != self.turn_total || prepared.old_board != self.board {
            return Err(GameError::InternalConflict(format!(
                "turn prepared at {} but session is at {}",
                prepared.base_turn_total, self.turn_total
            )));
        }
        let seat = self.ensure_turn(&prepared.player)?;

        let rack_size = self.config.rack_size;
        let player = &mut self.players[seat];
        player.rack = prepared.rack_after;
        let missing = rack_size.saturating_sub(player.rack.len());
        for tile in self.bag.draw(missing) {
            player.rack.push(tile);
        }
        player.score += prepared.points;
        let rack = player.rack.clone();

        self.advance();
        self.board = prepared.board.clone();
        let state = GameState {
            player: Some(prepared.player),
            turn: self.turn,
            turn_type: TurnType::Normal,
            outcome: Outcome::scored(prepared.words, prepared.points),
            old_board: prepared.old_board,
            board: prepared.board,
        };
        self.history.push_back(state.clone());

        Ok(TurnReceipt {
            state,
            info: self.turn_info(),
            rack,
        })
    }

    /// Pass the turn without placing tiles.
    pub fn skip(&mut self, player: &PlayerId) -> Result<(GameState, TurnInfo), GameError> {
        self.ensure_turn(player)?;
        let board = self.board().clone();

        self.advance();
        let state = GameState {
            player: Some(player.clone()),
            turn: self.turn,
            turn_type: TurnType::Skip,
            outcome: Outcome::default(),
            old_board: board.clone(),
            board,
        };
        self.history.push_back(state.clone());

        Ok((state, self.turn_info()))
    }

    fn advance(&mut self) {
        self.turn = (self.turn + 1) % self.players.len();
        self.turn_total += 1;
    }
}
