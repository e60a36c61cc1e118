//! Banker LLM Port - narrow capability interface for the text generator.
//!
//! The engine treats the generative layer as a fallible black box behind
//! four calls: intent classification, sentiment classification, and the two
//! line composers. Implementations connect to a hosted model; tests inject
//! deterministic stubs. Every call is expected to either answer within a
//! bounded time or fail - the engine recovers from any failure with its
//! documented safe defaults and never lets a misbehaving model stall a
//! negotiation.
//!
//! # Authoritative amounts
//!
//! `compose_offer_line` returns whatever number the model chose to mention;
//! that number is advisory text. The engine always overwrites it with the
//! amount computed by the offer calculator before anything reaches the
//! player.

use async_trait::async_trait;

use crate::domain::dialogue::Intent;
use crate::domain::negotiation::{OfferQuote, Sentiment};

/// Port for the external text-generation capability.
#[async_trait]
pub trait BankerLlm: Send + Sync {
    /// Asks whether this turn should produce an OFFER or a CONVERSATION
    /// reply, given the player's message and game context.
    async fn classify_intent(&self, request: &IntentRequest) -> Result<Intent, LlmError>;

    /// Classifies the player's affect from their message. Adapters parse
    /// labels fail-closed; an error here degrades to neutral upstream.
    async fn classify_sentiment(&self, message: &str) -> Result<Sentiment, LlmError>;

    /// Composes the banker's negotiation line for a computed offer.
    async fn compose_offer_line(&self, request: &OfferLineRequest) -> Result<OfferLine, LlmError>;

    /// Composes a conversational reply with no offer attached.
    async fn compose_conversation_line(
        &self,
        request: &ConversationRequest,
    ) -> Result<String, LlmError>;
}

/// Context for intent classification.
#[derive(Debug, Clone)]
pub struct IntentRequest {
    /// The player's message verbatim.
    pub message: String,
    /// Current round number.
    pub round: u32,
    /// Amounts still in play.
    pub remaining: Vec<u64>,
}

/// Context for composing an offer line.
#[derive(Debug, Clone)]
pub struct OfferLineRequest {
    /// The player's message verbatim.
    pub player_message: String,
    /// The authoritative computed offer.
    pub quote: OfferQuote,
}

/// Context for composing a conversational line.
#[derive(Debug, Clone)]
pub struct ConversationRequest {
    /// The player's message verbatim.
    pub player_message: String,
    /// Current round number.
    pub round: u32,
    /// Amounts still in play.
    pub remaining: Vec<u64>,
    /// Player sentiment for tone selection.
    pub sentiment: Sentiment,
    /// Tone direction for the reply, selected by sentiment.
    pub presentation_style: String,
}

/// A composed offer line. The `offer` field is the model's echo and is
/// overwritten with the computed amount before use.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferLine {
    pub message: String,
    pub offer: u64,
}

/// Failures of the text-generation capability.
///
/// None of these are fatal to a turn; the engine substitutes deterministic
/// fallbacks and continues.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LlmError {
    /// The call did not answer within the configured bound.
    #[error("llm request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u32 },

    /// Transport-level failure.
    #[error("llm network error: {0}")]
    Network(String),

    /// The model answered with something the adapter could not parse.
    #[error("llm response unparseable: {0}")]
    Unparseable(String),

    /// The provider rejected or could not serve the request.
    #[error("llm provider unavailable: {0}")]
    Unavailable(String),

    /// API key or authentication failed.
    #[error("llm authentication failed")]
    AuthenticationFailed,
}

impl LlmError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        LlmError::Network(message.into())
    }

    /// Creates an unparseable-response error.
    pub fn unparseable(message: impl Into<String>) -> Self {
        LlmError::Unparseable(message.into())
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        LlmError::Unavailable(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_display_usefully() {
        assert_eq!(
            LlmError::Timeout { timeout_secs: 30 }.to_string(),
            "llm request timed out after 30s"
        );
        assert_eq!(
            LlmError::unparseable("not json").to_string(),
            "llm response unparseable: not json"
        );
        assert_eq!(
            LlmError::AuthenticationFailed.to_string(),
            "llm authentication failed"
        );
    }
}
