//! Sessions and the turn engine.
//!
//! - `state`: immutable turn records
//! - `session`: one match and its mutations
//! - `turn`: the validate / extract / score / check-words pipeline
//! - `registry`: concurrent map of live sessions
//! - `directory`: player registry boundary
//! - `engine`: `GameEngine` entry points

pub mod directory;
pub mod engine;
pub mod registry;
#[allow(clippy::module_inception)]
pub mod session;
pub mod state;
pub mod turn;

pub use directory::{InMemoryDirectory, PlayerDirectory, PlayerProfile};
pub use engine::{GameEngine, SeatRequest};
pub use registry::{SessionHandle, SessionRegistry};
pub use session::Session;
pub use state::{GameState, Outcome, TurnInfo, TurnReceipt, TurnType};
pub use turn::{check_words, prepare_turn, PreparedTurn, TurnStage};
