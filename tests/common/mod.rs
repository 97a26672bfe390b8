//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use wordgrid::core::{EngineConfig, Locale, PlayerId, RackTile};
use wordgrid::dictionary::{LookupError, WordList, WordValidator};
use wordgrid::session::{GameEngine, InMemoryDirectory, PlayerProfile, SeatRequest};
use wordgrid::tiles::{StandardDistributions, TileDistributionProvider, TileSet};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Initialise test logging once. Level from `TEST_LOG`, then `RUST_LOG`, else `warn`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Says yes to every word.
pub struct AcceptAll;

#[async_trait]
impl WordValidator for AcceptAll {
    async fn exists(&self, _locale: &Locale, _word: &str) -> Result<bool, LookupError> {
        Ok(true)
    }
}

/// Serves a single tile set for English.
pub struct OneSet(pub Arc<TileSet>);

impl TileDistributionProvider for OneSet {
    fn tile_set(&self, locale: &Locale) -> Option<Arc<TileSet>> {
        (locale == self.0.locale()).then(|| Arc::clone(&self.0))
    }
}

pub const OWNER: &str = "owner";

/// Directory with `owner` registered in English.
pub fn directory() -> Arc<InMemoryDirectory> {
    let directory = InMemoryDirectory::new();
    directory.register(PlayerProfile::new(OWNER, "Owner", Locale::english()));
    Arc::new(directory)
}

pub fn owner() -> PlayerId {
    PlayerId::new(OWNER)
}

pub fn seats(ids: &[&str]) -> Vec<SeatRequest> {
    ids.iter().map(|id| SeatRequest::new(*id, id.to_uppercase())).collect()
}

/// Engine on the standard English set that accepts every word.
pub fn open_engine(seed: u64) -> GameEngine {
    init_logging();
    GameEngine::new(
        EngineConfig::default().with_seed(seed),
        Arc::new(AcceptAll),
        directory(),
        Arc::new(StandardDistributions::new().unwrap()),
    )
    .unwrap()
}

/// Engine on `set` checking words against `words`.
pub fn engine_with(set: TileSet, words: &[&str], config: EngineConfig) -> GameEngine {
    init_logging();
    GameEngine::new(
        config,
        Arc::new(WordList::from_words(Locale::english(), words.iter().copied())),
        directory(),
        Arc::new(OneSet(Arc::new(set))),
    )
    .unwrap()
}

/// Playable letter for a rack tile; wildcards become `E`.
pub fn letter_of(tile: RackTile) -> char {
    match tile {
        RackTile::Letter(letter) => letter.as_char(),
        RackTile::Wildcard => 'E',
    }
}

/// Rack as sorted text, wildcards as `_`.
pub fn rack_text(tiles: &[RackTile]) -> String {
    let mut chars: Vec<char> = tiles
        .iter()
        .map(|t| match t {
            RackTile::Letter(letter) => letter.as_char(),
            RackTile::Wildcard => '_',
        })
        .collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}
