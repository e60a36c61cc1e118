//! Dialogue policy - OFFER vs CONVERSATION.
//!
//! The decider performs no language understanding of its own. It accepts
//! exactly one of two labels from the external signal and resolves anything
//! else (timeout, parse failure, refusal) to the safe, non-committal
//! CONVERSATION default. Defaulting to OFFER would create an unintended
//! financial commitment, so that direction is never taken.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse intent label returned by the external classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Intent {
    Offer,
    Conversation,
}

impl Intent {
    /// Parses a classifier label. Only the two exact labels are accepted;
    /// everything else is `None` and resolves to CONVERSATION downstream.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_uppercase().as_str() {
            "OFFER" => Some(Intent::Offer),
            "CONVERSATION" => Some(Intent::Conversation),
            _ => None,
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::Offer => write!(f, "OFFER"),
            Intent::Conversation => write!(f, "CONVERSATION"),
        }
    }
}

/// What this turn should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnDirective {
    /// Compute and quote a number.
    Offer,
    /// Converse without committing to a number.
    Conversation,
}

/// Resolves the external intent signal into a turn directive.
///
/// Deterministic given a deterministic signal: `Ok(Offer)` maps to an offer
/// turn, every other outcome degrades to conversation.
pub fn resolve_directive<E>(signal: Result<Intent, E>) -> TurnDirective {
    match signal {
        Ok(Intent::Offer) => TurnDirective::Offer,
        Ok(Intent::Conversation) | Err(_) => TurnDirective::Conversation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offer_signal_yields_offer_directive() {
        let signal: Result<Intent, ()> = Ok(Intent::Offer);
        assert_eq!(resolve_directive(signal), TurnDirective::Offer);
    }

    #[test]
    fn conversation_signal_yields_conversation_directive() {
        let signal: Result<Intent, ()> = Ok(Intent::Conversation);
        assert_eq!(resolve_directive(signal), TurnDirective::Conversation);
    }

    #[test]
    fn degraded_signal_never_defaults_to_offer() {
        let signal: Result<Intent, &str> = Err("timed out");
        assert_eq!(resolve_directive(signal), TurnDirective::Conversation);
    }

    #[test]
    fn label_parsing_accepts_only_the_two_labels() {
        assert_eq!(Intent::from_label("OFFER"), Some(Intent::Offer));
        assert_eq!(Intent::from_label(" conversation "), Some(Intent::Conversation));
        assert_eq!(Intent::from_label("MAYBE"), None);
        assert_eq!(Intent::from_label(""), None);
        assert_eq!(Intent::from_label("make them an offer"), None);
    }

    #[test]
    fn resolution_is_deterministic() {
        for _ in 0..5 {
            let signal: Result<Intent, ()> = Ok(Intent::Offer);
            assert_eq!(resolve_directive(signal), TurnDirective::Offer);
        }
    }
}
