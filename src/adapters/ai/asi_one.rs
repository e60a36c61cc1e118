//! ASI-One Provider - Implementation of BankerLlm against the ASI-One API.
//!
//! ASI-One exposes an OpenAI-compatible chat completions endpoint. Each of
//! the four port calls is one prompt and one completion; no streaming, no
//! conversation history on the provider side.
//!
//! # Configuration
//!
//! ```ignore
//! let config = AsiOneConfig::new(api_key)
//!     .with_model("asi1-mini")
//!     .with_timeout(Duration::from_secs(30));
//!
//! let provider = AsiOneProvider::new(config);
//! ```
//!
//! # Degradation contract
//!
//! Every failure surfaces as an `LlmError` and the caller substitutes its
//! deterministic fallback. This adapter therefore never retries: a slow
//! provider should cost the turn one timeout, not several.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::dialogue::Intent;
use crate::domain::negotiation::Sentiment;
use crate::ports::{
    BankerLlm, ConversationRequest, IntentRequest, LlmError, OfferLine, OfferLineRequest,
};

/// Configuration for the ASI-One provider.
#[derive(Debug, Clone)]
pub struct AsiOneConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use.
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl AsiOneConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "asi1-mini".to_string(),
            base_url: "https://api.asi1.ai/v1".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// ASI-One API provider implementation.
pub struct AsiOneProvider {
    config: AsiOneConfig,
    client: Client,
}

impl AsiOneProvider {
    /// Creates a new ASI-One provider with the given configuration.
    pub fn new(config: AsiOneConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Sends one prompt as a single-message chat completion and returns
    /// the model's text.
    async fn complete(&self, prompt: String, max_tokens: u32) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt,
            }],
            max_tokens,
        };

        let response = self
            .client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    LlmError::network(format!("Connection failed: {}", e))
                } else {
                    LlmError::network(e.to_string())
                }
            })?;

        let response = self.handle_response_status(response).await?;

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::unparseable(format!("Failed to parse response: {}", e)))?;

        let choice = chat
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::unparseable("No choices in response"))?;

        Ok(choice.message.content)
    }

    /// Maps non-success statuses onto port errors.
    async fn handle_response_status(&self, response: Response) -> Result<Response, LlmError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 | 403 => Err(LlmError::AuthenticationFailed),
            429 => Err(LlmError::unavailable(format!(
                "Rate limited: {}",
                error_body
            ))),
            500..=599 => Err(LlmError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(LlmError::network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }
}

#[async_trait]
impl BankerLlm for AsiOneProvider {
    async fn classify_intent(&self, request: &IntentRequest) -> Result<Intent, LlmError> {
        let prompt = intent_prompt(request);
        let answer = self.complete(prompt, 10).await?;
        Intent::from_label(&answer)
            .ok_or_else(|| LlmError::unparseable(format!("Unrecognized intent label: {answer:?}")))
    }

    async fn classify_sentiment(&self, message: &str) -> Result<Sentiment, LlmError> {
        let prompt = sentiment_prompt(message);
        let answer = self.complete(prompt, 10).await?;
        // from_label is fail-closed; an off-script answer reads as neutral.
        Ok(Sentiment::from_label(&answer))
    }

    async fn compose_offer_line(&self, request: &OfferLineRequest) -> Result<OfferLine, LlmError> {
        let prompt = offer_line_prompt(request);
        let answer = self.complete(prompt, 300).await?;

        let payload: OfferLinePayload = serde_json::from_str(extract_json(&answer))
            .map_err(|e| LlmError::unparseable(format!("Offer line was not JSON: {}", e)))?;

        Ok(OfferLine {
            message: payload.message,
            offer: payload.offer.map(|o| o.max(0.0) as u64).unwrap_or_default(),
        })
    }

    async fn compose_conversation_line(
        &self,
        request: &ConversationRequest,
    ) -> Result<String, LlmError> {
        let prompt = conversation_prompt(request);
        let answer = self.complete(prompt, 200).await?;
        let line = answer.trim();
        if line.is_empty() {
            return Err(LlmError::unparseable("Empty conversation line"));
        }
        Ok(line.to_string())
    }
}

// ───────────────────────────── Prompts ─────────────────────────────

fn intent_prompt(request: &IntentRequest) -> String {
    format!(
        "You are the Banker in a high-stakes money game, round {round} with these \
         amounts still in play: {remaining:?}.\n\
         The player said: '{message}'\n\
         Should the banker respond with a monetary offer, or just converse?\n\
         Answer with exactly one word: OFFER or CONVERSATION.\n\
         Answer OFFER only when the player is asking for or negotiating a number.",
        round = request.round,
        remaining = request.remaining,
        message = request.message,
    )
}

fn sentiment_prompt(message: &str) -> String {
    format!(
        "Analyze the sentiment of this message: '{message}'\n\
         Classify as one of: 'confident', 'desperate', 'aggressive', or 'neutral'.\n\
         Return *only* the classification word, no additional text."
    )
}

fn offer_line_prompt(request: &OfferLineRequest) -> String {
    let quote = &request.quote;
    format!(
        "You are the Banker AI in a high-stakes money game.\n\
         Your job is to negotiate offers with the player while keeping the house advantage.\n\
         \n\
         Context provided:\n\
         - Round number: {round}\n\
         - Expected Value (EV): ${ev:.2}\n\
         - Your offer from the rules engine: ${offer}\n\
         - Player sentiment: {sentiment}\n\
         - House edge: {edge:.2}\n\
         - Pressure tactic for this round: {tactic}\n\
         - Presentation style: {style}\n\
         \n\
         Rules:\n\
         1. Present exactly the offer above; never invent a different number.\n\
         2. Witty, shrewd, professional personality. Deliver the offer in the \
         presentation style above.\n\
         3. Keep messages short (1-3 sentences).\n\
         4. Always output JSON with this structure:\n\
         {{\n\
           \"message\": \"Your negotiation line to the player\",\n\
           \"offer\": <number>\n\
         }}\n\
         \n\
         Player's message: \"{player}\"",
        round = quote.round,
        ev = quote.expected_value,
        offer = quote.amount,
        sentiment = quote.sentiment,
        edge = quote.house_edge,
        tactic = quote.psychology,
        style = quote.presentation_style,
        player = request.player_message,
    )
}

fn conversation_prompt(request: &ConversationRequest) -> String {
    format!(
        "You are the Banker AI in a high-stakes money game, round {round}.\n\
         Amounts still in play: {remaining:?}. Player sentiment: {sentiment}.\n\
         The player said: \"{player}\"\n\
         Reply in character, {style}. Banter, needle them about the risk on \
         the board, but do NOT quote any offer amount.\n\
         Keep it to 1-3 sentences of plain text, no JSON.",
        round = request.round,
        remaining = request.remaining,
        sentiment = request.sentiment,
        style = request.presentation_style,
        player = request.player_message,
    )
}

/// Strips a markdown code fence if the model wrapped its JSON in one.
fn extract_json(answer: &str) -> &str {
    let trimmed = answer.trim();
    let inner = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .unwrap_or(trimmed);
    inner.trim()
}

// ───────────────────────── ASI-One API Types ─────────────────────────

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct OfferLinePayload {
    message: String,
    #[serde(default)]
    offer: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder_works() {
        let config = AsiOneConfig::new("test-key")
            .with_model("asi1-large")
            .with_base_url("https://custom.api.com/v1")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.model, "asi1-large");
        assert_eq!(config.base_url, "https://custom.api.com/v1");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.api_key(), "test-key");
    }

    #[test]
    fn defaults_target_asi_one() {
        let config = AsiOneConfig::new("k");
        assert_eq!(config.model, "asi1-mini");
        assert_eq!(config.base_url, "https://api.asi1.ai/v1");
    }

    #[test]
    fn completions_url_is_openai_shaped() {
        let provider = AsiOneProvider::new(AsiOneConfig::new("k"));
        assert_eq!(
            provider.completions_url(),
            "https://api.asi1.ai/v1/chat/completions"
        );
    }

    #[test]
    fn extract_json_strips_code_fences() {
        let fenced = "```json\n{\"message\":\"hi\",\"offer\":100}\n```";
        assert_eq!(extract_json(fenced), "{\"message\":\"hi\",\"offer\":100}");

        let bare = "  {\"message\":\"hi\"}  ";
        assert_eq!(extract_json(bare), "{\"message\":\"hi\"}");
    }

    #[test]
    fn offer_line_payload_tolerates_missing_offer() {
        let payload: OfferLinePayload =
            serde_json::from_str(r#"{"message":"Take it or leave it."}"#).unwrap();
        assert_eq!(payload.message, "Take it or leave it.");
        assert!(payload.offer.is_none());
    }

    #[test]
    fn offer_line_payload_accepts_float_offers() {
        let payload: OfferLinePayload =
            serde_json::from_str(r#"{"message":"Deal?","offer":95249.0}"#).unwrap();
        assert_eq!(payload.offer, Some(95_249.0));
    }

    #[test]
    fn prompts_carry_the_presentation_style() {
        use crate::domain::negotiation::OfferCalculator;

        let calc = OfferCalculator::default();
        let quote = calc
            .quote(&[1_000, 500_000], 1, Sentiment::Confident)
            .unwrap();
        let prompt = offer_line_prompt(&OfferLineRequest {
            player_message: "deal?".to_string(),
            quote,
        });
        assert!(prompt.contains("Presentation style: playful and challenging"));

        let prompt = conversation_prompt(&ConversationRequest {
            player_message: "hello".to_string(),
            round: 1,
            remaining: vec![100, 1_000],
            sentiment: Sentiment::Desperate,
            presentation_style: "cold and calculating".to_string(),
        });
        assert!(prompt.contains("cold and calculating"));
    }

    #[test]
    fn intent_prompt_forces_one_word_answers() {
        let prompt = intent_prompt(&IntentRequest {
            message: "give me a number".to_string(),
            round: 2,
            remaining: vec![100, 1_000_000],
        });
        assert!(prompt.contains("OFFER or CONVERSATION"));
        assert!(prompt.contains("give me a number"));
    }
}
