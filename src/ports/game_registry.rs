//! Game Registry Port - per-game serialized access to sessions.
//!
//! The registry owns the map from game identifiers to live sessions and
//! guarantees at most one in-flight mutation per game at a time: `get`
//! hands back the session behind a per-game `tokio::sync::Mutex`, so
//! concurrent requests for the same id queue while distinct ids proceed in
//! parallel. The core never evicts sessions itself; `remove` exists for
//! external housekeeping.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::foundation::GameId;
use crate::domain::game::GameSession;

/// Errors from registry operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RegistryError {
    /// Unknown game identifier.
    #[error("game not found: {0}")]
    NotFound(GameId),

    /// A session with this identifier already exists.
    #[error("game already registered: {0}")]
    AlreadyExists(GameId),
}

/// A registered session behind its per-game lock.
pub type SharedSession = Arc<Mutex<GameSession>>;

/// Port for the in-memory session registry.
#[async_trait]
pub trait GameRegistry: Send + Sync {
    /// Registers a new session under its own id.
    ///
    /// # Errors
    ///
    /// `RegistryError::AlreadyExists` if the id is taken. Identifiers are
    /// UUIDs, so this only fires on caller bugs.
    async fn insert(&self, session: GameSession) -> Result<(), RegistryError>;

    /// Looks up the session for a game id.
    ///
    /// # Errors
    ///
    /// `RegistryError::NotFound` for unknown ids.
    async fn get(&self, id: GameId) -> Result<SharedSession, RegistryError>;

    /// Evicts a session. For external housekeeping only; the engine never
    /// calls this.
    async fn remove(&self, id: GameId) -> Result<(), RegistryError>;

    /// Lists the ids of all registered sessions.
    async fn ids(&self) -> Vec<GameId>;
}
