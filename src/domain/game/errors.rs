//! Typed errors for game-session operations.

use thiserror::Error;

use super::GameStatus;
use crate::domain::foundation::GameId;

/// Errors surfaced by the game state machine and the negotiation engine.
///
/// Every variant is caller-visible; nothing here is swallowed. Computation
/// errors (`InvalidState` out of the offer pipeline) are contract bugs to
/// fix, not conditions to retry.
#[derive(Debug, Clone, Error)]
pub enum GameError {
    /// An operation's precondition on session data does not hold, e.g. an
    /// empty remaining board or a missing standing offer.
    #[error("invalid state: {reason}")]
    InvalidState { reason: String },

    /// A state-machine transition is not allowed from the current status.
    /// Carries the status so the caller can decide what to do next.
    #[error("invalid transition: {reason} (current status: {current})")]
    InvalidTransition { current: GameStatus, reason: String },

    /// Unknown game identifier.
    #[error("game not found: {0}")]
    NotFound(GameId),
}

impl GameError {
    /// Creates an invalid-state error.
    pub fn invalid_state(reason: impl Into<String>) -> Self {
        GameError::InvalidState {
            reason: reason.into(),
        }
    }

    /// Creates an invalid-transition error for the given status.
    pub fn invalid_transition(current: GameStatus, reason: impl Into<String>) -> Self {
        GameError::InvalidTransition {
            current,
            reason: reason.into(),
        }
    }
}
