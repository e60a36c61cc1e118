//! GetHistoryHandler - Query handler for a game's message journal.

use std::sync::Arc;

use crate::application::EngineError;
use crate::domain::foundation::GameId;
use crate::domain::game::{GameStatus, JournalEntry};
use crate::ports::GameRegistry;

/// Query for a game's journal.
#[derive(Debug, Clone)]
pub struct GetHistoryCommand {
    pub game_id: GameId,
}

/// A game's journal with its outcome summary.
#[derive(Debug, Clone)]
pub struct GetHistoryResult {
    pub game_id: GameId,
    /// Journal entries in insertion order, never truncated.
    pub journal: Vec<JournalEntry>,
    pub status: GameStatus,
    /// Payout, once a deal was accepted.
    pub final_amount: Option<u64>,
}

/// Handler for journal queries.
pub struct GetHistoryHandler {
    registry: Arc<dyn GameRegistry>,
}

impl GetHistoryHandler {
    pub fn new(registry: Arc<dyn GameRegistry>) -> Self {
        Self { registry }
    }

    /// Returns the ordered journal for a game.
    ///
    /// # Errors
    ///
    /// - `Registry(NotFound)` for unknown game ids
    pub async fn handle(&self, cmd: GetHistoryCommand) -> Result<GetHistoryResult, EngineError> {
        let shared = self.registry.get(cmd.game_id).await?;
        let session = shared.lock().await;

        Ok(GetHistoryResult {
            game_id: cmd.game_id,
            journal: session.journal().to_vec(),
            status: session.status(),
            final_amount: session.final_amount(),
        })
    }
}
