//! Core engine types: identifiers, positions, tiles, players, RNG, configuration, errors.
//!
//! Everything else in the crate builds on these. Nothing here knows about
//! turns or sessions.

pub mod entity;
pub mod position;
pub mod tile;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use entity::{Locale, SessionId};
pub use position::{Axis, Position};
pub use tile::{Letter, Modifier, ParseModifierError, RackTile, WILDCARD_MARKER};
pub use player::{Player, PlayerId, Rack};
pub use rng::GameRng;
pub use config::{EngineConfig, ModifierPolicy, WildcardPoints};
pub use error::GameError;
