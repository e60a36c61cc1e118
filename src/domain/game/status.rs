//! Game lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a completed game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    /// Player accepted the standing offer.
    Accepted,
    /// Player walked away from negotiation.
    Abandoned,
    /// Player rode it out and opened their own box.
    Won,
}

/// Lifecycle status of a game session.
///
/// Transitions only move forward: `Active` -> `Completed(_)`, and a
/// completed game never leaves its terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", tag = "state", content = "outcome")]
pub enum GameStatus {
    #[default]
    Active,
    Completed(GameOutcome),
}

impl GameStatus {
    /// Returns true while the game still accepts player actions.
    pub fn is_active(&self) -> bool {
        matches!(self, GameStatus::Active)
    }

    /// Returns true once the game has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Completed(_))
    }

    /// Validates a transition from this status to another.
    ///
    /// Valid transitions:
    /// - Active -> Completed(any outcome)
    pub fn can_transition_to(&self, target: &GameStatus) -> bool {
        matches!((self, target), (GameStatus::Active, GameStatus::Completed(_)))
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Active => write!(f, "active"),
            GameStatus::Completed(GameOutcome::Accepted) => write!(f, "completed(accepted)"),
            GameStatus::Completed(GameOutcome::Abandoned) => write!(f, "completed(abandoned)"),
            GameStatus::Completed(GameOutcome::Won) => write!(f, "completed(won)"),
        }
    }
}
