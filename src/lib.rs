//! # wordgrid
//!
//! Turn-processing and scoring engine for concurrent sessions of a
//! tile-placement word game.
//!
//! ## Design Principles
//!
//! 1. **All-or-Nothing Turns**: A turn is diffed, validated, extracted, scored
//!    and dictionary-checked before anything is written. A rejected turn
//!    leaves rack, board, bag and turn pointer exactly as they were.
//!
//! 2. **Closed Errors**: Every rejection is a `GameError` variant with a
//!    stable code. Callers branch on the variant, never on message text.
//!
//! 3. **Injected Collaborators**: Word lookup, player resolution and tile
//!    distributions are traits handed to the engine. There is no global state.
//!
//! ## Architecture
//!
//! - **Per-Session Locking**: The registry is a sharded concurrent map. Each
//!   session has its own async lock, held across the dictionary await.
//!
//! - **Persistent Boards**: Board snapshots share structure via `im-rs`, so
//!   every history record keeps its own board cheaply.
//!
//! - **Deterministic Randomness**: A seeded master RNG forks one stream per
//!   session; turn order and bag draws use separate context streams.
//!
//! ## Modules
//!
//! - `core`: Positions, letters, racks, players, RNG, configuration, errors
//! - `tiles`: Locale tile sets, modifier layouts, the tile bag
//! - `board`: Board snapshots and the proposal diff
//! - `rules`: Placement validation, word extraction, scoring
//! - `dictionary`: Word validator boundary, overrides, fallback, cache
//! - `session`: Turn records, sessions, registry and `GameEngine`

pub mod core;
pub mod tiles;
pub mod board;
pub mod rules;
pub mod dictionary;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Axis, Position,
    Letter, Modifier, RackTile,
    Player, PlayerId, Rack,
    Locale, SessionId,
    GameRng, EngineConfig, ModifierPolicy, WildcardPoints,
    GameError,
};

pub use crate::tiles::{TileBag, TileSet, TileDistributionProvider, StandardDistributions};

pub use crate::board::{Board, BoardTile, PlacedTile, ProposedTile};

pub use crate::rules::{Extraction, ExtractedWord, Placement, Word, WordTile};

pub use crate::dictionary::{
    WordValidator, LookupError, WordList,
    LocaleOverrides, OverrideLists, FallbackChain, CachedValidator,
};

pub use crate::session::{
    GameEngine, SeatRequest,
    Session, SessionHandle, SessionRegistry,
    PlayerDirectory, PlayerProfile, InMemoryDirectory,
    GameState, Outcome, TurnInfo, TurnReceipt, TurnType,
};
