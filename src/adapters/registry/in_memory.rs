//! In-Memory Game Registry Adapter.
//!
//! Sessions live purely in process memory and are lost on restart; callers
//! needing durability must add persistence around the registry contract.
//! The outer `RwLock` guards only the map; each session sits behind its own
//! `Mutex`, so mutations on different games never contend.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::domain::foundation::GameId;
use crate::domain::game::GameSession;
use crate::ports::{GameRegistry, RegistryError, SharedSession};

/// In-memory registry of active games.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGameRegistry {
    games: Arc<RwLock<HashMap<GameId, SharedSession>>>,
}

impl InMemoryGameRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of registered games.
    pub async fn len(&self) -> usize {
        self.games.read().await.len()
    }

    /// Returns true if no games are registered.
    pub async fn is_empty(&self) -> bool {
        self.games.read().await.is_empty()
    }
}

#[async_trait]
impl GameRegistry for InMemoryGameRegistry {
    async fn insert(&self, session: GameSession) -> Result<(), RegistryError> {
        let id = session.id();
        let mut games = self.games.write().await;
        if games.contains_key(&id) {
            return Err(RegistryError::AlreadyExists(id));
        }
        games.insert(id, Arc::new(Mutex::new(session)));
        Ok(())
    }

    async fn get(&self, id: GameId) -> Result<SharedSession, RegistryError> {
        let games = self.games.read().await;
        games.get(&id).cloned().ok_or(RegistryError::NotFound(id))
    }

    async fn remove(&self, id: GameId) -> Result<(), RegistryError> {
        let mut games = self.games.write().await;
        games.remove(&id).map(|_| ()).ok_or(RegistryError::NotFound(id))
    }

    async fn ids(&self) -> Vec<GameId> {
        self.games.read().await.keys().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_session() -> GameSession {
        GameSession::with_default_board(GameId::new())
    }

    #[tokio::test]
    async fn insert_then_get_round_trips() {
        let registry = InMemoryGameRegistry::new();
        let session = test_session();
        let id = session.id();

        registry.insert(session).await.unwrap();
        let shared = registry.get(id).await.unwrap();
        assert_eq!(shared.lock().await.id(), id);
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let registry = InMemoryGameRegistry::new();
        let result = registry.get(GameId::new()).await;
        assert!(matches!(result, Err(RegistryError::NotFound(_))));
    }

    #[tokio::test]
    async fn double_insert_is_rejected() {
        let registry = InMemoryGameRegistry::new();
        let session = test_session();
        let duplicate = session.clone();

        registry.insert(session).await.unwrap();
        let result = registry.insert(duplicate).await;
        assert!(matches!(result, Err(RegistryError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn remove_evicts_the_session() {
        let registry = InMemoryGameRegistry::new();
        let session = test_session();
        let id = session.id();

        registry.insert(session).await.unwrap();
        registry.remove(id).await.unwrap();
        assert!(registry.get(id).await.is_err());
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn ids_lists_every_registered_game() {
        let registry = InMemoryGameRegistry::new();
        let a = test_session();
        let b = test_session();
        let (id_a, id_b) = (a.id(), b.id());

        registry.insert(a).await.unwrap();
        registry.insert(b).await.unwrap();

        let mut ids = registry.ids().await;
        ids.sort_by_key(|id| id.to_string());
        let mut expected = vec![id_a, id_b];
        expected.sort_by_key(|id| id.to_string());
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn same_game_mutations_serialize() {
        let registry = InMemoryGameRegistry::new();
        let session = test_session();
        let id = session.id();
        registry.insert(session).await.unwrap();

        let shared = registry.get(id).await.unwrap();
        let mut handles = Vec::new();
        for i in 0..8 {
            let shared = Arc::clone(&shared);
            handles.push(tokio::spawn(async move {
                let mut session = shared.lock().await;
                session.append_entry(crate::domain::game::JournalEntry::player(format!(
                    "message {}",
                    i
                )));
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let session = shared.lock().await;
        assert_eq!(session.journal().len(), 8);
    }
}
