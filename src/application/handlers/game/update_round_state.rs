//! UpdateRoundStateHandler - Command handler for box-opening updates.
//!
//! The game client owns box opening; it reports the new boards here and
//! receives a fresh banker reaction to the changed odds. The standing
//! offer is invalidated by the update and only returns if the reaction
//! turn quotes a new one.

use std::sync::Arc;

use tracing::info;

use super::pipeline::{conversation_copy, negotiate, offer_copy};
use crate::application::EngineError;
use crate::domain::dialogue::TurnResult;
use crate::domain::foundation::GameId;
use crate::domain::game::{GameSession, JournalEntry, MessageKind};
use crate::domain::negotiation::{OfferCalculator, Sentiment};
use crate::ports::{BankerLlm, GameRegistry};

/// Command to replace a game's boards and round.
#[derive(Debug, Clone)]
pub struct UpdateRoundStateCommand {
    pub game_id: GameId,
    pub remaining: Vec<u64>,
    pub burnt: Vec<u64>,
    pub round: u32,
    pub selected: Option<u64>,
}

/// Result of an applied round-state update.
#[derive(Debug, Clone)]
pub struct UpdateRoundStateResult {
    /// The banker's reaction to the new board, as journaled.
    pub banker_message: String,
    /// What kind of reaction the banker had.
    pub kind: MessageKind,
    /// Classified sentiment of the synthetic update message.
    pub sentiment: Sentiment,
    /// Post-update snapshot of the session.
    pub session: GameSession,
}

/// Handler for round-state updates.
pub struct UpdateRoundStateHandler {
    registry: Arc<dyn GameRegistry>,
    llm: Arc<dyn BankerLlm>,
    calculator: Arc<OfferCalculator>,
}

impl UpdateRoundStateHandler {
    pub fn new(
        registry: Arc<dyn GameRegistry>,
        llm: Arc<dyn BankerLlm>,
        calculator: Arc<OfferCalculator>,
    ) -> Self {
        Self {
            registry,
            llm,
            calculator,
        }
    }

    /// Applies the new boards and runs a banker reaction turn against them.
    ///
    /// The reaction is negotiated before any mutation; if the update itself
    /// is invalid the session is left untouched.
    ///
    /// # Errors
    ///
    /// - `Registry(NotFound)` for unknown game ids
    /// - `Game(InvalidTransition)` when the game is already completed
    /// - `Game(InvalidState)` for overlapping boards, an empty remaining
    ///   board, or a backwards round
    pub async fn handle(
        &self,
        cmd: UpdateRoundStateCommand,
    ) -> Result<UpdateRoundStateResult, EngineError> {
        let shared = self.registry.get(cmd.game_id).await?;
        let mut session = shared.lock().await;
        session.ensure_active("update the round state")?;

        let update_message = format!(
            "Game state updated: round {}, remaining cards: {:?}",
            cmd.round, cmd.remaining
        );
        let negotiated = negotiate(
            self.llm.as_ref(),
            self.calculator.as_ref(),
            &update_message,
            cmd.round,
            &cmd.remaining,
        )
        .await
        .map_err(EngineError::from)?;

        // All awaits are done; mutations from here on are synchronous.
        session.update_round_state(cmd.remaining, cmd.burnt, cmd.round, cmd.selected)?;
        let (banker_message, kind) = match negotiated.turn {
            TurnResult::Offer { quote, message } => {
                let copy = offer_copy(quote.round, quote.amount, &message);
                session.record_offer(quote)?;
                (copy, MessageKind::Offer)
            }
            TurnResult::Conversation { message } => {
                (conversation_copy(&message), MessageKind::Conversation)
            }
        };
        session.append_entry(JournalEntry::banker(&banker_message, kind));
        info!(game_id = %cmd.game_id, round = session.round(), ?kind, "round state updated");

        Ok(UpdateRoundStateResult {
            banker_message,
            kind,
            sentiment: negotiated.sentiment,
            session: session.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::ScriptedLlm;
    use crate::adapters::registry::InMemoryGameRegistry;
    use crate::domain::dialogue::Intent;
    use crate::domain::game::GameError;

    async fn seeded(llm: ScriptedLlm) -> (UpdateRoundStateHandler, Arc<InMemoryGameRegistry>, GameId) {
        let registry = Arc::new(InMemoryGameRegistry::new());
        let session = GameSession::with_default_board(GameId::new());
        let id = session.id();
        registry.insert(session).await.unwrap();
        let handler = UpdateRoundStateHandler::new(
            registry.clone(),
            Arc::new(llm),
            Arc::new(OfferCalculator::default()),
        );
        (handler, registry, id)
    }

    fn command(id: GameId) -> UpdateRoundStateCommand {
        UpdateRoundStateCommand {
            game_id: id,
            remaining: vec![100, 10_000, 1_000_000],
            burnt: vec![1, 5, 10],
            round: 2,
            selected: Some(500),
        }
    }

    #[tokio::test]
    async fn update_replaces_boards_and_advances_the_round() {
        let (handler, _, id) = seeded(ScriptedLlm::new()).await;

        let result = handler.handle(command(id)).await.unwrap();

        assert_eq!(result.session.round(), 2);
        assert_eq!(result.session.remaining(), &[100, 10_000, 1_000_000]);
        assert_eq!(result.session.burnt(), &[1, 5, 10]);
        assert_eq!(result.session.selected(), Some(500));
    }

    #[tokio::test]
    async fn update_offer_is_computed_against_the_new_board() {
        let llm = ScriptedLlm::new()
            .with_intent(Intent::Offer)
            .with_offer_line("The board shrank; so did my patience.");
        let (handler, _, id) = seeded(llm).await;

        let result = handler.handle(command(id)).await.unwrap();

        assert_eq!(result.kind, MessageKind::Offer);
        let offer = result.session.current_offer().expect("fresh offer");
        assert_eq!(offer.round, 2);
        // EV of the shrunken board, not the original 21-amount board
        let ev = (100u64 + 10_000 + 1_000_000) as f64 / 3.0;
        assert!((offer.expected_value - ev).abs() < 1e-9);
    }

    #[tokio::test]
    async fn conversational_update_leaves_no_standing_offer() {
        let (handler, _, id) = seeded(ScriptedLlm::new()).await;

        let result = handler.handle(command(id)).await.unwrap();

        assert_eq!(result.kind, MessageKind::Conversation);
        assert!(result.session.current_offer().is_none());
    }

    #[tokio::test]
    async fn invalid_update_leaves_the_session_untouched() {
        let (handler, registry, id) = seeded(ScriptedLlm::new()).await;

        let mut cmd = command(id);
        cmd.remaining = vec![100, 500];
        cmd.burnt = vec![500]; // overlap

        let result = handler.handle(cmd).await;
        assert!(matches!(
            result,
            Err(EngineError::Game(GameError::InvalidState { .. }))
        ));

        let session = registry.get(id).await.unwrap();
        let session = session.lock().await;
        assert_eq!(session.round(), 1);
        assert_eq!(session.remaining().len(), 21);
        assert!(session.journal().is_empty());
    }

    #[tokio::test]
    async fn backwards_round_is_rejected() {
        let (handler, _, id) = seeded(ScriptedLlm::new()).await;
        handler.handle(command(id)).await.unwrap();

        let mut cmd = command(id);
        cmd.round = 1;
        cmd.remaining = vec![100];
        cmd.burnt = vec![];

        let result = handler.handle(cmd).await;
        assert!(matches!(
            result,
            Err(EngineError::Game(GameError::InvalidState { .. }))
        ));
    }
}
