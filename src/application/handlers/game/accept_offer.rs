//! AcceptOfferHandler - Command handler for taking the standing deal.

use std::sync::Arc;

use tracing::info;

use super::pipeline::deal_accepted_copy;
use crate::application::EngineError;
use crate::domain::foundation::GameId;
use crate::domain::game::{GameSession, JournalEntry, MessageKind};
use crate::ports::GameRegistry;

/// Command to accept the standing offer.
#[derive(Debug, Clone)]
pub struct AcceptOfferCommand {
    pub game_id: GameId,
}

/// Result of an accepted deal.
#[derive(Debug, Clone)]
pub struct AcceptOfferResult {
    /// The amount paid out, frozen at acceptance.
    pub final_amount: u64,
    /// The banker's closing line.
    pub banker_message: String,
    /// Post-acceptance snapshot of the session.
    pub session: GameSession,
}

/// Handler for explicit deal acceptance.
pub struct AcceptOfferHandler {
    registry: Arc<dyn GameRegistry>,
}

impl AcceptOfferHandler {
    pub fn new(registry: Arc<dyn GameRegistry>) -> Self {
        Self { registry }
    }

    /// Accepts the standing offer and completes the game.
    ///
    /// # Errors
    ///
    /// - `Registry(NotFound)` for unknown game ids
    /// - `Game(InvalidState)` when no offer is standing
    /// - `Game(InvalidTransition)` when the game is already completed
    pub async fn handle(&self, cmd: AcceptOfferCommand) -> Result<AcceptOfferResult, EngineError> {
        let shared = self.registry.get(cmd.game_id).await?;
        let mut session = shared.lock().await;

        let final_amount = session.accept_offer()?;
        let banker_message = deal_accepted_copy(final_amount);
        session.append_entry(JournalEntry::banker(&banker_message, MessageKind::DealAccepted));
        info!(game_id = %cmd.game_id, final_amount, "deal accepted");

        Ok(AcceptOfferResult {
            final_amount,
            banker_message,
            session: session.clone(),
        })
    }
}
