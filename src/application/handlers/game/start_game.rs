//! StartGameHandler - Command handler for opening a new negotiation.

use std::sync::Arc;

use tracing::info;

use super::pipeline::{conversation_copy, negotiate, offer_copy};
use crate::application::EngineError;
use crate::domain::dialogue::TurnResult;
use crate::domain::foundation::GameId;
use crate::domain::game::{GameSession, JournalEntry, MessageKind};
use crate::domain::negotiation::OfferCalculator;
use crate::ports::{BankerLlm, GameRegistry};

/// Command to start a new game.
#[derive(Debug, Clone, Default)]
pub struct StartGameCommand;

/// Result of a successfully started game.
#[derive(Debug, Clone)]
pub struct StartGameResult {
    /// Snapshot of the freshly registered session.
    pub session: GameSession,
    /// The banker's opening line as journaled.
    pub banker_message: String,
    /// What kind of line the banker opened with.
    pub kind: MessageKind,
}

/// Handler for starting games.
pub struct StartGameHandler {
    registry: Arc<dyn GameRegistry>,
    llm: Arc<dyn BankerLlm>,
    calculator: Arc<OfferCalculator>,
}

impl StartGameHandler {
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

    /// Creates a session on the full board, runs the opening banker turn,
    /// and registers the session.
    ///
    /// The opening turn is a normal pipeline turn over the synthetic
    /// "start game" message; only the banker's line is journaled.
    pub async fn handle(&self, _cmd: StartGameCommand) -> Result<StartGameResult, EngineError> {
        let mut session = GameSession::with_default_board(GameId::new());

        let negotiated = negotiate(
            self.llm.as_ref(),
            self.calculator.as_ref(),
            "start game",
            session.round(),
            &session.remaining().to_vec(),
        )
        .await
        .map_err(EngineError::from)?;

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

        self.registry.insert(session.clone()).await?;
        info!(game_id = %session.id(), "started new game");

        Ok(StartGameResult {
            session,
            banker_message,
            kind,
        })
    }
}
