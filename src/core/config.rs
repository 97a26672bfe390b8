//! Engine configuration.
//!
//! `EngineConfig` fixes the board geometry, rack size, dictionary timeout and
//! randomness for every session an engine creates. All fields have defaults
//! matching the standard 15x15 game.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::GameError;
use super::position::Position;

/// Which tiles of a word pick up their cell's modifier when scoring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModifierPolicy {
    /// Every tile of the word, including tiles placed on earlier turns.
    #[default]
    EveryTile,
    /// Only tiles placed this turn (classic tournament rules).
    PlacedTilesOnly,
}

/// Base points of a tile paid for with a wildcard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WildcardPoints {
    /// The substituted letter's points from the tile set.
    #[default]
    AsLetter,
    /// Zero, whatever the letter (classic blanks).
    Zero,
}

/// Engine-wide configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Cells per side of the square board.
    pub board_size: u32,

    /// Cell the first move must cover.
    pub center: Position,

    /// Tiles per full rack.
    pub rack_size: usize,

    /// Upper bound on waiting for the word validator during one turn.
    pub lookup_timeout: Duration,

    /// Master seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    pub modifier_policy: ModifierPolicy,

    pub wildcard_points: WildcardPoints,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: 15,
            center: Position::new(7, 7),
            rack_size: 7,
            lookup_timeout: Duration::from_secs(5),
            seed: None,
            modifier_policy: ModifierPolicy::EveryTile,
            wildcard_points: WildcardPoints::AsLetter,
        }
    }
}

impl EngineConfig {
    /// Set a fixed seed for reproducible sessions.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the rack size.
    #[must_use]
    pub fn with_rack_size(mut self, rack_size: usize) -> Self {
        self.rack_size = rack_size;
        self
    }

    /// Set the dictionary timeout.
    #[must_use]
    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = timeout;
        self
    }

    /// Set the modifier policy.
    #[must_use]
    pub fn with_modifier_policy(mut self, policy: ModifierPolicy) -> Self {
        self.modifier_policy = policy;
        self
    }

    /// Set how wildcard tiles are scored.
    #[must_use]
    pub fn with_wildcard_points(mut self, points: WildcardPoints) -> Self {
        self.wildcard_points = points;
        self
    }

    /// Set the board geometry.
    #[must_use]
    pub fn with_board(mut self, board_size: u32, center: Position) -> Self {
        self.board_size = board_size;
        self.center = center;
        self
    }

    /// Reject configurations no session could be played under.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.board_size == 0 {
            return Err(GameError::InvalidSetup("board size must be positive".into()));
        }
        if !self.center.within(self.board_size) {
            return Err(GameError::InvalidSetup(format!(
                "center {} lies outside a {}x{} board",
                self.center, self.board_size, self.board_size
            )));
        }
        if self.rack_size == 0 {
            return Err(GameError::InvalidSetup("rack size must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.board_size, 15);
        assert_eq!(config.center, Position::new(7, 7));
        assert_eq!(config.rack_size, 7);
        assert_eq!(config.seed, None);
        assert_eq!(config.modifier_policy, ModifierPolicy::EveryTile);
        assert_eq!(config.wildcard_points, WildcardPoints::AsLetter);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_seed(123)
            .with_rack_size(5)
            .with_lookup_timeout(Duration::from_millis(50))
            .with_modifier_policy(ModifierPolicy::PlacedTilesOnly)
            .with_wildcard_points(WildcardPoints::Zero);

        assert_eq!(config.seed, Some(123));
        assert_eq!(config.rack_size, 5);
        assert_eq!(config.lookup_timeout, Duration::from_millis(50));
        assert_eq!(config.modifier_policy, ModifierPolicy::PlacedTilesOnly);
        assert_eq!(config.wildcard_points, WildcardPoints::Zero);
    }

    #[test]
    fn test_validate_rejects_bad_geometry() {
        let off_board = EngineConfig::default().with_board(5, Position::new(7, 7));
        assert_eq!(off_board.validate().unwrap_err().code(), "invalid-setup");

        let empty_rack = EngineConfig::default().with_rack_size(0);
        assert!(empty_rack.validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
