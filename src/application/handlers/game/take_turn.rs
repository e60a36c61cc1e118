//! TakeTurnHandler - Command handler for one player message.
//!
//! The heart of the negotiation loop. A turn is applied all-or-nothing:
//! the per-game lock is taken first, every external await completes before
//! the first mutation, and the mutations themselves are synchronous. A
//! turn that fails or is cancelled mid-flight leaves the session exactly
//! as it was.

use std::sync::Arc;

use tracing::info;

use super::phrases::{detect_deal_phrase, DealPhrase};
use super::pipeline::{conversation_copy, deal_accepted_copy, game_over_copy, negotiate, offer_copy};
use crate::application::EngineError;
use crate::domain::dialogue::TurnResult;
use crate::domain::foundation::GameId;
use crate::domain::game::{GameSession, JournalEntry, MessageKind};
use crate::domain::negotiation::{OfferCalculator, Sentiment};
use crate::ports::{BankerLlm, GameRegistry};

/// Command carrying one player message to a game.
#[derive(Debug, Clone)]
pub struct TakeTurnCommand {
    pub game_id: GameId,
    pub message: String,
}

/// Result of a completed turn.
#[derive(Debug, Clone)]
pub struct TakeTurnResult {
    /// The banker's reply as journaled (formatted copy).
    pub banker_message: String,
    /// What kind of reply this was.
    pub kind: MessageKind,
    /// Classified player sentiment; `None` on explicit accept/reject turns,
    /// which bypass classification.
    pub sentiment: Option<Sentiment>,
    /// Post-turn snapshot of the session.
    pub session: GameSession,
}

/// Handler for negotiation turns.
pub struct TakeTurnHandler {
    registry: Arc<dyn GameRegistry>,
    llm: Arc<dyn BankerLlm>,
    calculator: Arc<OfferCalculator>,
}

impl TakeTurnHandler {
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

    /// Applies one player message to a game.
    ///
    /// Explicit accept/reject phrases are honored before the model is
    /// consulted; an accept phrase with no standing offer falls through to
    /// the normal conversational path.
    ///
    /// # Errors
    ///
    /// - `Registry(NotFound)` for unknown game ids
    /// - `Game(InvalidTransition)` when the game is already completed
    pub async fn handle(&self, cmd: TakeTurnCommand) -> Result<TakeTurnResult, EngineError> {
        let shared = self.registry.get(cmd.game_id).await?;
        let mut session = shared.lock().await;
        session.ensure_active("chat")?;

        // Explicit deal decisions short-circuit the pipeline.
        match detect_deal_phrase(&cmd.message) {
            Some(DealPhrase::Reject) => {
                session.append_entry(JournalEntry::player(&cmd.message));
                session.reject_offer()?;
                let copy = game_over_copy();
                session.append_entry(JournalEntry::banker(&copy, MessageKind::GameOver));
                info!(game_id = %cmd.game_id, "player rejected the deal");
                return Ok(TakeTurnResult {
                    banker_message: copy,
                    kind: MessageKind::GameOver,
                    sentiment: None,
                    session: session.clone(),
                });
            }
            Some(DealPhrase::Accept) if session.current_offer().is_some() => {
                session.append_entry(JournalEntry::player(&cmd.message));
                let amount = session.accept_offer()?;
                let copy = deal_accepted_copy(amount);
                session.append_entry(JournalEntry::banker(&copy, MessageKind::DealAccepted));
                info!(game_id = %cmd.game_id, amount, "player accepted the deal");
                return Ok(TakeTurnResult {
                    banker_message: copy,
                    kind: MessageKind::DealAccepted,
                    sentiment: None,
                    session: session.clone(),
                });
            }
            // Acceptance of a deal that was never offered reads as talk.
            Some(DealPhrase::Accept) | None => {}
        }

        let remaining = session.remaining().to_vec();
        let round = session.round();
        let negotiated = negotiate(
            self.llm.as_ref(),
            self.calculator.as_ref(),
            &cmd.message,
            round,
            &remaining,
        )
        .await
        .map_err(EngineError::from)?;

        // All awaits are done; mutations from here on are synchronous.
        session.append_entry(JournalEntry::player(&cmd.message));
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
        info!(game_id = %cmd.game_id, ?kind, sentiment = %negotiated.sentiment, "processed turn");

        Ok(TakeTurnResult {
            banker_message,
            kind,
            sentiment: Some(negotiated.sentiment),
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
    use crate::domain::game::{GameOutcome, GameStatus, Sender};
    use crate::ports::RegistryError;

    async fn seeded_handler(llm: ScriptedLlm) -> (TakeTurnHandler, GameId) {
        let registry = Arc::new(InMemoryGameRegistry::new());
        let session = GameSession::with_default_board(GameId::new());
        let id = session.id();
        registry.insert(session).await.unwrap();
        let handler = TakeTurnHandler::new(
            registry,
            Arc::new(llm),
            Arc::new(OfferCalculator::default()),
        );
        (handler, id)
    }

    fn command(id: GameId, message: &str) -> TakeTurnCommand {
        TakeTurnCommand {
            game_id: id,
            message: message.to_string(),
        }
    }

    #[tokio::test]
    async fn unknown_game_is_not_found() {
        let (handler, _) = seeded_handler(ScriptedLlm::new()).await;

        let result = handler.handle(command(GameId::new(), "hello")).await;
        assert!(matches!(
            result,
            Err(EngineError::Registry(RegistryError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn offer_turn_journals_both_sides_and_records_the_offer() {
        let llm = ScriptedLlm::new()
            .with_intent(Intent::Offer)
            .with_offer_line("Guaranteed money beats a gamble.");
        let (handler, id) = seeded_handler(llm).await;

        let result = handler.handle(command(id, "give me a number")).await.unwrap();

        assert_eq!(result.kind, MessageKind::Offer);
        let offer = result.session.current_offer().expect("standing offer");
        assert!(result.banker_message.contains("Guaranteed money beats a gamble."));
        assert!((offer.amount as f64) < offer.expected_value);

        let journal = result.session.journal();
        assert_eq!(journal.len(), 2);
        assert_eq!(journal[0].sender, Sender::Player);
        assert_eq!(journal[1].kind, MessageKind::Offer);
    }

    #[tokio::test]
    async fn model_echoed_amount_never_reaches_the_player() {
        // ScriptedLlm always echoes amount+999; the copy must carry the
        // computed amount instead.
        let llm = ScriptedLlm::new()
            .with_intent(Intent::Offer)
            .with_offer_line("Final answer.");
        let (handler, id) = seeded_handler(llm).await;

        let result = handler.handle(command(id, "offer")).await.unwrap();

        let amount = result.session.current_offer().unwrap().amount;
        assert!(result
            .banker_message
            .contains(&super::super::pipeline::format_amount(amount)));
    }

    #[tokio::test]
    async fn dead_model_turn_still_succeeds_as_conversation() {
        let (handler, id) = seeded_handler(ScriptedLlm::always_failing()).await;

        let result = handler.handle(command(id, "hello banker")).await.unwrap();

        assert_eq!(result.kind, MessageKind::Conversation);
        assert_eq!(result.sentiment, Some(Sentiment::Neutral));
        assert_eq!(result.session.status(), GameStatus::Active);
        assert_eq!(result.session.journal().len(), 2);
    }

    #[tokio::test]
    async fn accept_phrase_with_standing_offer_completes_the_game() {
        let llm = ScriptedLlm::new().with_intent(Intent::Offer);
        let (handler, id) = seeded_handler(llm).await;

        handler.handle(command(id, "make me an offer")).await.unwrap();
        let result = handler.handle(command(id, "I accept")).await.unwrap();

        assert_eq!(result.kind, MessageKind::DealAccepted);
        assert_eq!(
            result.session.status(),
            GameStatus::Completed(GameOutcome::Accepted)
        );
        assert!(result.session.final_amount().is_some());
        assert!(result.banker_message.contains("DEAL ACCEPTED"));
    }

    #[tokio::test]
    async fn accept_phrase_without_offer_falls_through_to_conversation() {
        let llm = ScriptedLlm::new().with_conversation_line("Accept what, exactly?");
        let (handler, id) = seeded_handler(llm).await;

        let result = handler.handle(command(id, "I accept")).await.unwrap();

        assert_eq!(result.kind, MessageKind::Conversation);
        assert_eq!(result.session.status(), GameStatus::Active);
    }

    #[tokio::test]
    async fn reject_phrase_abandons_the_game() {
        let (handler, id) = seeded_handler(ScriptedLlm::new()).await;

        let result = handler.handle(command(id, "no deal!")).await.unwrap();

        assert_eq!(result.kind, MessageKind::GameOver);
        assert_eq!(
            result.session.status(),
            GameStatus::Completed(GameOutcome::Abandoned)
        );
    }

    #[tokio::test]
    async fn completed_games_refuse_further_turns() {
        let (handler, id) = seeded_handler(ScriptedLlm::new()).await;
        handler.handle(command(id, "no deal")).await.unwrap();

        let result = handler.handle(command(id, "wait, one more round")).await;
        assert!(matches!(
            result,
            Err(EngineError::Game(
                crate::domain::game::GameError::InvalidTransition { .. }
            ))
        ));
    }

    #[tokio::test]
    async fn journal_grows_by_two_per_successful_turn() {
        let llm = ScriptedLlm::new()
            .with_conversation_line("one")
            .with_conversation_line("two")
            .with_conversation_line("three");
        let (handler, id) = seeded_handler(llm).await;

        for message in ["hi", "how are you", "what's on the board"] {
            handler.handle(command(id, message)).await.unwrap();
        }

        let result = handler.handle(command(id, "tell me more")).await.unwrap();
        assert_eq!(result.session.journal().len(), 8);
    }
}
