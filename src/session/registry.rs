//! Live sessions keyed by id.
//!
//! The map is sharded (`DashMap`), so creating or ending one session never
//! waits on another. Each entry is an `Arc<SessionHandle>` with its own async
//! lock; callers clone the handle out of the map and release the shard before
//! awaiting that lock.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, MutexGuard};

use super::session::Session;
use crate::core::{PlayerId, SessionId};

/// A registered session and its lock.
#[derive(Debug)]
pub struct SessionHandle {
    id: SessionId,
    /// Seated player ids, fixed for the session's lifetime.
    roster: Vec<PlayerId>,
    session: Mutex<Session>,
}

impl SessionHandle {
    pub fn new(session: Session) -> Self {
        Self {
            id: session.id(),
            roster: session.players().iter().map(|p| p.id.clone()).collect(),
            session: Mutex::new(session),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Seated player ids in turn order.
    pub fn roster(&self) -> &[PlayerId] {
        &self.roster
    }

    /// Whether `player` is seated here. Does not take the lock.
    pub fn seats(&self, player: &PlayerId) -> bool {
        self.roster.contains(player)
    }

    /// Exclusive access to the session.
    pub async fn lock(&self) -> MutexGuard<'_, Session> {
        self.session.lock().await
    }

    /// A copy of the session as it is now.
    pub async fn snapshot(&self) -> Session {
        self.session.lock().await.clone()
    }
}

/// Concurrent map of live sessions.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: DashMap<SessionId, Arc<SessionHandle>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `session` and return its handle.
    pub fn insert(&self, session: Session) -> Arc<SessionHandle> {
        let handle = Arc::new(SessionHandle::new(session));
        self.sessions.insert(handle.id(), Arc::clone(&handle));
        handle
    }

    pub fn get(&self, id: SessionId) -> Option<Arc<SessionHandle>> {
        self.sessions.get(&id).map(|entry| Arc::clone(entry.value()))
    }

    /// Unregister a session. Holders of its handle keep a usable copy.
    pub fn remove(&self, id: SessionId) -> Option<Arc<SessionHandle>> {
        self.sessions.remove(&id).map(|(_, handle)| handle)
    }

    pub fn contains(&self, id: SessionId) -> bool {
        self.sessions.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// The session `player` is seated in, if any.
    ///
    /// Linear in the number of live sessions. If the player sits in several,
    /// any one of them is returned.
    pub fn find_by_player(&self, player: &PlayerId) -> Option<Arc<SessionHandle>> {
        self.sessions
            .iter()
            .find(|entry| entry.value().seats(player))
            .map(|entry| Arc::clone(entry.value()))
    }
}
