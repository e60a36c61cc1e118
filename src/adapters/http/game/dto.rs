//! HTTP DTOs for game endpoints.
//!
//! These types decouple the HTTP API from domain types. Field names follow
//! the game client's vocabulary (cards, cases) rather than the domain's.

use serde::{Deserialize, Serialize};

use crate::domain::game::{GameSession, GameStatus, JournalEntry, MessageKind, Sender};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to send a message to the banker.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub game_id: String,
    pub message: String,
}

/// Request to accept or reject the standing deal.
#[derive(Debug, Clone, Deserialize)]
pub struct DealRequest {
    pub game_id: String,
}

/// Request to report opened boxes and the new round.
#[derive(Debug, Clone, Deserialize)]
pub struct GameStateRequest {
    pub game_id: String,
    pub remaining_cards: Vec<u64>,
    pub burnt_cards: Vec<u64>,
    pub round: u32,
    #[serde(default)]
    pub selected_case: Option<u64>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Snapshot of a game for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct GameStateResponse {
    pub game_id: String,
    pub round: u32,
    pub remaining_cards: Vec<u64>,
    pub burnt_cards: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_case: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_offer: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_edge: Option<f64>,
    pub status: String,
}

impl From<&GameSession> for GameStateResponse {
    fn from(session: &GameSession) -> Self {
        let offer = session.current_offer();
        Self {
            game_id: session.id().to_string(),
            round: session.round(),
            remaining_cards: session.remaining().to_vec(),
            burnt_cards: session.burnt().to_vec(),
            selected_case: session.selected(),
            current_offer: offer.map(|q| q.amount),
            expected_value: offer.map(|q| q.expected_value),
            house_edge: offer.map(|q| q.house_edge),
            status: status_label(session.status()),
        }
    }
}

/// Response to a started game.
#[derive(Debug, Clone, Serialize)]
pub struct StartGameResponse {
    pub game_id: String,
    pub game_state: GameStateResponse,
    pub banker_message: String,
}

/// The banker's reply to a chat, deal, or state-update request.
#[derive(Debug, Clone, Serialize)]
pub struct BankerReplyResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer: Option<u64>,
    pub message_type: MessageKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<String>,
    pub game_state: GameStateResponse,
}

/// One journaled message.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub timestamp: String,
    pub sender: Sender,
    pub message: String,
    pub message_type: MessageKind,
}

impl From<&JournalEntry> for MessageResponse {
    fn from(entry: &JournalEntry) -> Self {
        Self {
            timestamp: entry.timestamp.to_rfc3339(),
            sender: entry.sender,
            message: entry.text.clone(),
            message_type: entry.kind,
        }
    }
}

/// A game's full message history.
#[derive(Debug, Clone, Serialize)]
pub struct GameHistoryResponse {
    pub game_id: String,
    pub messages: Vec<MessageResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_winnings: Option<u64>,
}

/// The registered game ids.
#[derive(Debug, Clone, Serialize)]
pub struct ActiveGamesResponse {
    pub active_games: Vec<String>,
    pub total_games: usize,
    pub timestamp: String,
}

/// Service health probe response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: String,
}

/// Standard error envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            code: "CONFLICT".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

/// Lifecycle label used in API payloads.
pub fn status_label(status: GameStatus) -> String {
    match status {
        GameStatus::Active => "active".to_string(),
        GameStatus::Completed(_) => "completed".to_string(),
    }
}
