//! Scripted LLM for testing.
//!
//! A configurable, deterministic implementation of the BankerLlm port:
//! queued responses per call kind, error injection for degradation testing,
//! and call recording for verification. Negotiation stays reproducible
//! because every answer is scripted.
//!
//! # Example
//!
//! ```ignore
//! let llm = ScriptedLlm::new()
//!     .with_intent(Intent::Offer)
//!     .with_sentiment(Sentiment::Confident)
//!     .with_offer_line("Take the money and run.");
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::dialogue::Intent;
use crate::domain::negotiation::Sentiment;
use crate::ports::{
    BankerLlm, ConversationRequest, IntentRequest, LlmError, OfferLine, OfferLineRequest,
};

/// A recorded call for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptedCall {
    Intent(String),
    Sentiment(String),
    OfferLine(u64),
    ConversationLine(String),
}

/// Deterministic scripted implementation of the BankerLlm port.
#[derive(Debug, Clone, Default)]
pub struct ScriptedLlm {
    intents: Arc<Mutex<VecDeque<Result<Intent, LlmError>>>>,
    sentiments: Arc<Mutex<VecDeque<Result<Sentiment, LlmError>>>>,
    offer_lines: Arc<Mutex<VecDeque<Result<String, LlmError>>>>,
    conversation_lines: Arc<Mutex<VecDeque<Result<String, LlmError>>>>,
    fail_everything: bool,
    calls: Arc<Mutex<Vec<ScriptedCall>>>,
}

impl ScriptedLlm {
    /// Creates a scripted LLM whose unscripted answers fall back to the
    /// safe defaults (conversation intent, neutral sentiment, stock lines).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scripted LLM where every call fails with a timeout, for
    /// degradation testing.
    pub fn always_failing() -> Self {
        Self {
            fail_everything: true,
            ..Self::default()
        }
    }

    /// Queues an intent classification.
    pub fn with_intent(self, intent: Intent) -> Self {
        self.intents.lock().unwrap().push_back(Ok(intent));
        self
    }

    /// Queues an intent classification failure.
    pub fn with_intent_error(self, error: LlmError) -> Self {
        self.intents.lock().unwrap().push_back(Err(error));
        self
    }

    /// Queues a sentiment classification.
    pub fn with_sentiment(self, sentiment: Sentiment) -> Self {
        self.sentiments.lock().unwrap().push_back(Ok(sentiment));
        self
    }

    /// Queues a sentiment classification failure.
    pub fn with_sentiment_error(self, error: LlmError) -> Self {
        self.sentiments.lock().unwrap().push_back(Err(error));
        self
    }

    /// Queues an offer line.
    pub fn with_offer_line(self, message: impl Into<String>) -> Self {
        self.offer_lines.lock().unwrap().push_back(Ok(message.into()));
        self
    }

    /// Queues an offer line failure.
    pub fn with_offer_line_error(self, error: LlmError) -> Self {
        self.offer_lines.lock().unwrap().push_back(Err(error));
        self
    }

    /// Queues a conversational line.
    pub fn with_conversation_line(self, message: impl Into<String>) -> Self {
        self.conversation_lines
            .lock()
            .unwrap()
            .push_back(Ok(message.into()));
        self
    }

    /// Queues a conversational line failure.
    pub fn with_conversation_line_error(self, error: LlmError) -> Self {
        self.conversation_lines.lock().unwrap().push_back(Err(error));
        self
    }

    /// Returns every call made so far, in order.
    pub fn calls(&self) -> Vec<ScriptedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Returns the number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: ScriptedCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn timeout() -> LlmError {
        LlmError::Timeout { timeout_secs: 30 }
    }
}

#[async_trait]
impl BankerLlm for ScriptedLlm {
    async fn classify_intent(&self, request: &IntentRequest) -> Result<Intent, LlmError> {
        self.record(ScriptedCall::Intent(request.message.clone()));
        if self.fail_everything {
            return Err(Self::timeout());
        }
        self.intents
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(Intent::Conversation))
    }

    async fn classify_sentiment(&self, message: &str) -> Result<Sentiment, LlmError> {
        self.record(ScriptedCall::Sentiment(message.to_string()));
        if self.fail_everything {
            return Err(Self::timeout());
        }
        self.sentiments
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(Sentiment::Neutral))
    }

    async fn compose_offer_line(&self, request: &OfferLineRequest) -> Result<OfferLine, LlmError> {
        self.record(ScriptedCall::OfferLine(request.quote.amount));
        if self.fail_everything {
            return Err(Self::timeout());
        }
        self.offer_lines
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("The house is feeling generous today.".to_string()))
            .map(|message| OfferLine {
                message,
                // Scripted echo deliberately disagrees with the computed
                // amount so tests catch any caller that trusts it.
                offer: request.quote.amount.saturating_add(999),
            })
    }

    async fn compose_conversation_line(
        &self,
        request: &ConversationRequest,
    ) -> Result<String, LlmError> {
        self.record(ScriptedCall::ConversationLine(request.player_message.clone()));
        if self.fail_everything {
            return Err(Self::timeout());
        }
        self.conversation_lines
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("Big numbers are still on the board. Feeling brave?".to_string()))
    }
}
