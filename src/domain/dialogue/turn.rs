//! Tagged result of a single negotiation turn.

use serde::Serialize;

use crate::domain::negotiation::OfferQuote;

/// What a turn produced: a quoted number or a conversational line.
///
/// The two arms are deliberately a sum type so OFFER/CONVERSATION handling
/// stays exhaustive at every call site.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TurnResult {
    /// A monetary offer with its computation snapshot and banker line.
    Offer { quote: OfferQuote, message: String },
    /// A conversational reply with no number attached.
    Conversation { message: String },
}

impl TurnResult {
    /// Returns the banker line for this turn.
    pub fn message(&self) -> &str {
        match self {
            TurnResult::Offer { message, .. } => message,
            TurnResult::Conversation { message } => message,
        }
    }

    /// Returns the quote, if this turn made an offer.
    pub fn quote(&self) -> Option<&OfferQuote> {
        match self {
            TurnResult::Offer { quote, .. } => Some(quote),
            TurnResult::Conversation { .. } => None,
        }
    }
}
