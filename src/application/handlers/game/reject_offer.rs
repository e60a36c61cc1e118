//! RejectOfferHandler - Command handler for walking away from the deal.

use std::sync::Arc;

use tracing::info;

use super::pipeline::game_over_copy;
use crate::application::EngineError;
use crate::domain::foundation::GameId;
use crate::domain::game::{GameSession, JournalEntry, MessageKind};
use crate::ports::GameRegistry;

/// Command to reject the deal and end the game.
#[derive(Debug, Clone)]
pub struct RejectOfferCommand {
    pub game_id: GameId,
}

/// Result of a rejected deal.
#[derive(Debug, Clone)]
pub struct RejectOfferResult {
    /// The banker's closing line.
    pub banker_message: String,
    /// Post-rejection snapshot of the session.
    pub session: GameSession,
}

/// Handler for explicit deal rejection.
pub struct RejectOfferHandler {
    registry: Arc<dyn GameRegistry>,
}

impl RejectOfferHandler {
    pub fn new(registry: Arc<dyn GameRegistry>) -> Self {
        Self { registry }
    }

    /// Ends the game as abandoned.
    ///
    /// # Errors
    ///
    /// - `Registry(NotFound)` for unknown game ids
    /// - `Game(InvalidTransition)` when the game is already completed
    pub async fn handle(&self, cmd: RejectOfferCommand) -> Result<RejectOfferResult, EngineError> {
        let shared = self.registry.get(cmd.game_id).await?;
        let mut session = shared.lock().await;

        session.reject_offer()?;
        let banker_message = game_over_copy();
        session.append_entry(JournalEntry::banker(&banker_message, MessageKind::GameOver));
        info!(game_id = %cmd.game_id, "deal rejected");

        Ok(RejectOfferResult {
            banker_message,
            session: session.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::registry::InMemoryGameRegistry;
    use crate::domain::game::{GameError, GameOutcome, GameStatus};

    async fn seeded() -> (RejectOfferHandler, GameId) {
        let registry = Arc::new(InMemoryGameRegistry::new());
        let session = GameSession::with_default_board(GameId::new());
        let id = session.id();
        registry.insert(session).await.unwrap();
        (RejectOfferHandler::new(registry), id)
    }

    #[tokio::test]
    async fn rejecting_abandons_the_game() {
        let (handler, id) = seeded().await;

        let result = handler.handle(RejectOfferCommand { game_id: id }).await.unwrap();

        assert_eq!(
            result.session.status(),
            GameStatus::Completed(GameOutcome::Abandoned)
        );
        assert!(result.session.final_amount().is_none());
        assert!(result.banker_message.contains("Deal Rejected"));
    }

    #[tokio::test]
    async fn rejecting_a_completed_game_fails() {
        let (handler, id) = seeded().await;
        handler.handle(RejectOfferCommand { game_id: id }).await.unwrap();

        let result = handler.handle(RejectOfferCommand { game_id: id }).await;
        assert!(matches!(
            result,
            Err(EngineError::Game(GameError::InvalidTransition { .. }))
        ));
    }
}
