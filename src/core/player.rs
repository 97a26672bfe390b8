//! Player identification, racks and per-player session data.
//!
//! ## PlayerId
//!
//! Opaque identifier issued by the external player registry.
//!
//! ## Rack
//!
//! Small inline multiset of tiles backed by `SmallVec`, so a full rack never
//! allocates.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::tile::RackTile;

/// Player identifier issued by the external player registry.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Create a new player ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A player's private pool of tiles.
///
/// Order is irrelevant; removal swaps the last tile into the hole.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rack {
    tiles: SmallVec<[RackTile; 7]>,
}

impl Rack {
    /// Create an empty rack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tiles held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// View the tiles.
    #[must_use]
    pub fn tiles(&self) -> &[RackTile] {
        &self.tiles
    }

    /// Add a tile.
    pub fn push(&mut self, tile: RackTile) {
        self.tiles.push(tile);
    }

    /// Number of wildcards held.
    #[must_use]
    pub fn wildcards(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_wildcard()).count()
    }

    /// Remove one instance of `tile`.
    ///
    /// Returns true if the tile was found and removed.
    pub fn remove(&mut self, tile: RackTile) -> bool {
        if let Some(pos) = self.tiles.iter().position(|&t| t == tile) {
            self.tiles.swap_remove(pos);
            true
        } else {
            false
        }
    }
}

impl FromIterator<RackTile> for Rack {
    fn from_iter<I: IntoIterator<Item = RackTile>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}

/// A seated player in a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    pub rack: Rack,
    /// Cumulative score.
    pub score: u32,
}

impl Player {
    /// Create a player with an empty rack and no score.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            rack: Rack::new(),
            score: 0,
        }
    }
}
