//! Scoring through full turns.
//!
//! Each test deals a single-seat session from a tile set small enough that
//! the rack is known in advance, then checks committed points.

mod common;

use common::{engine_with, owner, seats};
use wordgrid::board::propose;
use wordgrid::core::{EngineConfig, Locale, Modifier, ModifierPolicy, PlayerId, Position};
use wordgrid::session::{GameEngine, SessionHandle};
use wordgrid::tiles::TileSet;

use std::sync::Arc;

/// C=3, A=1, T=1, S=1, one of each.
fn cats() -> TileSet {
    TileSet::new(Locale::english()).with_letters("C", 3, 1).with_letters("ATS", 1, 1)
}

fn deal(set: TileSet, config: EngineConfig) -> (GameEngine, Arc<SessionHandle>) {
    let engine = engine_with(set, &["cat", "cats"], config.with_seed(3).with_rack_size(4));
    let handle = engine.begin_session(&owner(), seats(&["solo"])).unwrap();
    (engine, handle)
}

async fn play(engine: &GameEngine, handle: &SessionHandle, tiles: &[(i32, i32, char)]) -> u32 {
    let board = handle.snapshot().await.board().clone();
    engine
        .play_turn(handle.id(), &PlayerId::new("solo"), &propose(&board, tiles))
        .await
        .unwrap()
        .state
        .points()
}

const CAT: &[(i32, i32, char)] = &[(6, 7, 'C'), (7, 7, 'A'), (8, 7, 'T')];

// =============================================================================
// Reference examples
// =============================================================================

/// CAT with no modifiers scores 3 + 1 + 1.
#[tokio::test]
async fn test_cat_plain() {
    let (engine, handle) = deal(cats(), EngineConfig::default());
    assert_eq!(play(&engine, &handle, CAT).await, 5);
}

/// A double letter under C doubles only C.
#[tokio::test]
async fn test_cat_double_letter() {
    let set = cats().with_modifier(Position::new(6, 7), Modifier::DoubleLetter);
    let (engine, handle) = deal(set, EngineConfig::default());
    assert_eq!(play(&engine, &handle, CAT).await, 8);
}

/// A triple word on top of that triples the finished sum once.
#[tokio::test]
async fn test_cat_double_letter_triple_word() {
    let set = cats()
        .with_modifier(Position::new(6, 7), Modifier::DoubleLetter)
        .with_modifier(Position::new(8, 7), Modifier::TripleWord);
    let (engine, handle) = deal(set, EngineConfig::default());
    assert_eq!(play(&engine, &handle, CAT).await, 24);
}

/// Word multipliers stack by product.
#[tokio::test]
async fn test_word_multipliers_multiply() {
    let set = cats()
        .with_modifier(Position::new(6, 7), Modifier::DoubleWord)
        .with_modifier(Position::new(8, 7), Modifier::TripleWord);
    let (engine, handle) = deal(set, EngineConfig::default());
    assert_eq!(play(&engine, &handle, CAT).await, 5 * 6);
}

// =============================================================================
// Modifier policy
// =============================================================================

fn reused_modifiers() -> TileSet {
    cats()
        .with_modifier(Position::new(6, 7), Modifier::DoubleLetter)
        .with_modifier(Position::new(8, 7), Modifier::TripleWord)
}

/// By default, modifiers under earlier tiles count again.
#[tokio::test]
async fn test_every_tile_policy_reuses_modifiers() {
    let (engine, handle) = deal(reused_modifiers(), EngineConfig::default());
    assert_eq!(play(&engine, &handle, CAT).await, 24);
    // CATS: (6 + 1 + 1 + 1) x 3
    assert_eq!(play(&engine, &handle, &[(9, 7, 'S')]).await, 27);
}

/// Classic rules only honour modifiers under tiles placed this turn.
#[tokio::test]
async fn test_placed_tiles_only_policy() {
    let config = EngineConfig::default().with_modifier_policy(ModifierPolicy::PlacedTilesOnly);
    let (engine, handle) = deal(reused_modifiers(), config);
    assert_eq!(play(&engine, &handle, CAT).await, 24);
    assert_eq!(play(&engine, &handle, &[(9, 7, 'S')]).await, 6);
}

// =============================================================================
// Totals
// =============================================================================

/// Points accumulate on the player across turns.
#[tokio::test]
async fn test_score_accumulates() {
    let (engine, handle) = deal(cats(), EngineConfig::default());
    play(&engine, &handle, CAT).await;
    play(&engine, &handle, &[(9, 7, 'S')]).await;

    let session = handle.snapshot().await;
    assert_eq!(session.player(&PlayerId::new("solo")).unwrap().score, 5 + 6);
    let per_turn: u32 = session.history().iter().map(|s| s.points()).sum();
    assert_eq!(per_turn, 11);
}

/// The standard English board puts a triple letter on the center.
#[test]
fn test_english_center_is_triple_letter() {
    let english = wordgrid::tiles::english().unwrap();
    assert_eq!(english.modifier_at(Position::new(7, 7)), Some(Modifier::TripleLetter));
    assert_eq!(english.total_tiles(), 100);
}
