//! Player registry boundary.
//!
//! Accounts live outside the engine. The engine only needs to resolve a
//! session owner to learn their locale.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Locale, PlayerId};

/// What the engine knows about a registered player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub id: PlayerId,
    pub name: String,
    pub locale: Locale,
}

impl PlayerProfile {
    pub fn new(id: impl Into<String>, name: impl Into<String>, locale: Locale) -> Self {
        Self {
            id: PlayerId::new(id),
            name: name.into(),
            locale,
        }
    }
}

/// Resolves player ids to profiles.
pub trait PlayerDirectory: Send + Sync {
    fn resolve(&self, id: &PlayerId) -> Option<PlayerProfile>;
}

/// Directory backed by a concurrent map.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    profiles: DashMap<PlayerId, PlayerProfile>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a profile.
    pub fn register(&self, profile: PlayerProfile) {
        self.profiles.insert(profile.id.clone(), profile);
    }

    pub fn unregister(&self, id: &PlayerId) -> Option<PlayerProfile> {
        self.profiles.remove(id).map(|(_, profile)| profile)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl FromIterator<PlayerProfile> for InMemoryDirectory {
    fn from_iter<I: IntoIterator<Item = PlayerProfile>>(iter: I) -> Self {
        let directory = Self::new();
        for profile in iter {
            directory.register(profile);
        }
        directory
    }
}

impl PlayerDirectory for InMemoryDirectory {
    fn resolve(&self, id: &PlayerId) -> Option<PlayerProfile> {
        self.profiles.get(id).map(|entry| entry.value().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_resolve() {
        let directory: InMemoryDirectory = [
            PlayerProfile::new("ann", "Ann", Locale::english()),
            PlayerProfile::new("luc", "Luc", Locale::new("fr")),
        ]
        .into_iter()
        .collect();

        assert_eq!(directory.len(), 2);
        assert_eq!(
            directory.resolve(&PlayerId::new("luc")).map(|p| p.locale),
            Some(Locale::new("fr"))
        );
        assert!(directory.resolve(&PlayerId::new("bob")).is_none());
    }

    #[test]
    fn test_unregister() {
        let directory = InMemoryDirectory::new();
        directory.register(PlayerProfile::new("ann", "Ann", Locale::english()));
        assert!(directory.unregister(&PlayerId::new("ann")).is_some());
        assert!(directory.is_empty());
    }
}
