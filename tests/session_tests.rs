//! Session lifecycle and concurrency tests.

mod common;

use std::sync::Arc;

use common::{directory, letter_of, open_engine, owner, seats, AcceptAll};
use wordgrid::board::propose;
use wordgrid::core::{EngineConfig, GameError, Locale, PlayerId};
use wordgrid::session::{GameEngine, PlayerProfile, SessionRegistry, TurnType};
use wordgrid::tiles::StandardDistributions;

// =============================================================================
// Lifecycle
// =============================================================================

/// A new session deals full racks and records the empty start board.
#[tokio::test]
async fn test_begin_session() {
    let engine = open_engine(1);
    let handle = engine.begin_session(&owner(), seats(&["ann", "bob", "cid"])).unwrap();
    let session = handle.snapshot().await;

    assert_eq!(session.owner(), &owner());
    assert_eq!(session.locale(), &Locale::english());
    assert_eq!(session.players().len(), 3);
    assert!(session.players().iter().all(|p| p.rack.len() == 7 && p.score == 0));
    assert_eq!(session.bag_size(), 100 - 21);
    assert_eq!(session.tiles_in_play(), 100);

    assert_eq!(session.history().len(), 1);
    assert_eq!(session.history()[0].turn_type, TurnType::Start);
    assert!(session.board().is_empty());
    assert_eq!(session.turn_info().turn, 0);
    assert_eq!(session.turn_info().turn_total, 0);

    // The roster follows the shuffled turn order.
    let order: Vec<_> = session.players().iter().map(|p| p.id.clone()).collect();
    assert_eq!(handle.roster(), order.as_slice());
}

/// The same seed deals the same order and racks.
#[tokio::test]
async fn test_seeded_sessions_repeat() {
    let a = open_engine(77).begin_session(&owner(), seats(&["ann", "bob", "cid", "dee"])).unwrap();
    let b = open_engine(77).begin_session(&owner(), seats(&["ann", "bob", "cid", "dee"])).unwrap();
    assert_eq!(a.snapshot().await.players(), b.snapshot().await.players());
}

/// Successive sessions of one engine get independent streams.
#[tokio::test]
async fn test_sessions_get_distinct_streams() {
    let engine = open_engine(77);
    let ids = ["p1", "p2", "p3", "p4", "p5", "p6"];
    let a = engine.begin_session(&owner(), seats(&ids)).unwrap();
    let b = engine.begin_session(&owner(), seats(&ids)).unwrap();
    assert_ne!(a.snapshot().await.players(), b.snapshot().await.players());
}

/// Ending a session discards it; ending it twice is an error.
#[tokio::test]
async fn test_end_session() {
    let engine = open_engine(2);
    let handle = engine.begin_session(&owner(), seats(&["ann", "bob"])).unwrap();

    engine.end_session(handle.id()).unwrap();
    assert!(engine.registry().is_empty());
    assert_eq!(
        engine.session(handle.id()).unwrap_err(),
        GameError::UnknownSession(handle.id())
    );
    assert_eq!(engine.end_session(handle.id()).unwrap_err().code(), "unknown-session");
}

/// The owner must be known to the directory, and their locale supported.
#[tokio::test]
async fn test_owner_resolution() {
    let directory = directory();
    directory.register(PlayerProfile::new("zoe", "Zoe", Locale::new("de")));
    let engine = GameEngine::new(
        EngineConfig::default().with_seed(5),
        Arc::new(AcceptAll),
        directory,
        Arc::new(StandardDistributions::new().unwrap()),
    )
    .unwrap();

    let err = engine.begin_session(&PlayerId::new("ghost"), seats(&["ann"])).unwrap_err();
    assert_eq!(err, GameError::UnknownOwner(PlayerId::new("ghost")));

    let err = engine.begin_session(&PlayerId::new("zoe"), seats(&["ann"])).unwrap_err();
    assert_eq!(err.code(), "unsupported-locale");
}

// =============================================================================
// Lookups
// =============================================================================

/// Players are found across sessions without taking any session lock.
#[tokio::test]
async fn test_find_by_player() {
    let engine = open_engine(3);
    let first = engine.begin_session(&owner(), seats(&["ann", "bob"])).unwrap();
    let second = engine.begin_session(&owner(), seats(&["cid"])).unwrap();

    let _guard = first.lock().await;
    assert_eq!(engine.find_session(&PlayerId::new("bob")).map(|h| h.id()), Some(first.id()));
    assert_eq!(engine.find_session(&PlayerId::new("cid")).map(|h| h.id()), Some(second.id()));
    assert!(engine.find_session(&PlayerId::new("dan")).is_none());
}

/// Two engines can share one registry.
#[tokio::test]
async fn test_shared_registry() {
    let registry = Arc::new(SessionRegistry::new());
    let a = open_engine(4).with_registry(Arc::clone(&registry));
    let b = open_engine(5).with_registry(Arc::clone(&registry));

    let handle = a.begin_session(&owner(), seats(&["ann"])).unwrap();
    assert!(b.session(handle.id()).is_ok());
    b.end_session(handle.id()).unwrap();
    assert!(a.session(handle.id()).is_err());
}

// =============================================================================
// Concurrency
// =============================================================================

/// Racing submissions of the same move commit exactly once.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_racing_plays_commit_once() {
    let engine = Arc::new(open_engine(6));
    let handle = engine.begin_session(&owner(), seats(&["ann", "bob"])).unwrap();
    let session = handle.snapshot().await;
    let player = session.turn_player().id.clone();
    let rack = session.turn_player().rack.tiles().to_vec();
    let proposed = propose(session.board(), &[(7, 7, letter_of(rack[0])), (8, 7, letter_of(rack[1]))]);

    let tasks: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let player = player.clone();
            let proposed = proposed.clone();
            let id = handle.id();
            tokio::spawn(async move { engine.play_turn(id, &player, &proposed).await })
        })
        .collect();

    let mut committed = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => committed += 1,
            Err(err) => assert_eq!(err, GameError::NotYourTurn(player.clone())),
        }
    }

    assert_eq!(committed, 1);
    let after = handle.snapshot().await;
    assert_eq!(after.turn_total(), 1);
    assert_eq!(after.tiles_in_play(), 100);
}

/// Independent sessions progress in parallel.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_parallel_sessions() {
    let engine = Arc::new(open_engine(7));
    let handles: Vec<_> = (0..16)
        .map(|i| {
            let ids = [format!("a{i}"), format!("b{i}")];
            engine
                .begin_session(&owner(), seats(&[ids[0].as_str(), ids[1].as_str()]))
                .unwrap()
        })
        .collect();

    let tasks: Vec<_> = handles
        .iter()
        .map(|handle| {
            let engine = Arc::clone(&engine);
            let handle = Arc::clone(handle);
            tokio::spawn(async move {
                for _ in 0..10 {
                    let player = handle.snapshot().await.turn_player().id.clone();
                    engine.skip_turn(handle.id(), &player).await.unwrap();
                }
            })
        })
        .collect();

    for task in tasks {
        task.await.unwrap();
    }

    for handle in &handles {
        let session = handle.snapshot().await;
        assert_eq!(session.turn_total(), 10);
        assert_eq!(session.turn(), 0);
        assert_eq!(session.history().len(), 11);
    }
    assert_eq!(engine.registry().len(), 16);
}
