//! Player sentiment classification.
//!
//! Sentiment is a coarse affect label produced by the external language
//! capability and used to bias the offer. Unknown labels fail closed to
//! `Neutral` so a misbehaving classifier can never change the engine's
//! contract.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse player-affect classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Confident,
    Desperate,
    Aggressive,
    #[default]
    Neutral,
}

impl Sentiment {
    /// Parses a classifier label, failing closed to `Neutral`.
    ///
    /// Accepts the four known labels case-insensitively with surrounding
    /// whitespace; anything else degrades to neutral behavior.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "confident" => Sentiment::Confident,
            "desperate" => Sentiment::Desperate,
            "aggressive" => Sentiment::Aggressive,
            "neutral" => Sentiment::Neutral,
            _ => Sentiment::Neutral,
        }
    }

    /// Returns the canonical label string.
    pub fn as_label(&self) -> &'static str {
        match self {
            Sentiment::Confident => "confident",
            Sentiment::Desperate => "desperate",
            Sentiment::Aggressive => "aggressive",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_label())
    }
}
