//! Shared negotiation pipeline for banker turns.
//!
//! One player message in, one banker turn out: classify sentiment, resolve
//! the OFFER/CONVERSATION directive, compute the quote when directed, and
//! compose the banker's line. Every external call degrades locally - a
//! misbehaving model costs the turn its flavor text, never its success.
//!
//! The pipeline performs no session mutation. Callers hold the per-game
//! lock, await this function, and only then apply the result, so a
//! cancelled turn leaves the session exactly as it found it.

use tracing::debug;

use crate::domain::dialogue::{resolve_directive, TurnDirective, TurnResult};
use crate::domain::game::GameError;
use crate::domain::negotiation::{OfferCalculator, Sentiment};
use crate::ports::{BankerLlm, ConversationRequest, IntentRequest, OfferLineRequest};

/// Fallback banter when the conversational composer is unavailable.
const CANNED_CONVERSATION_LINE: &str =
    "Big numbers are still on that board. Open a few more boxes and we'll talk.";

/// A fully composed turn, ready to apply to the session.
#[derive(Debug, Clone)]
pub(crate) struct NegotiatedTurn {
    pub turn: TurnResult,
    pub sentiment: Sentiment,
}

/// Runs the full negotiation pipeline for one player message.
///
/// # Errors
///
/// Only the offer computation can fail, and only on an empty board; live
/// sessions never present one.
pub(crate) async fn negotiate(
    llm: &dyn BankerLlm,
    calculator: &OfferCalculator,
    message: &str,
    round: u32,
    remaining: &[u64],
) -> Result<NegotiatedTurn, GameError> {
    let sentiment = llm
        .classify_sentiment(message)
        .await
        .unwrap_or(Sentiment::Neutral);

    let signal = llm
        .classify_intent(&IntentRequest {
            message: message.to_string(),
            round,
            remaining: remaining.to_vec(),
        })
        .await;
    let directive = resolve_directive(signal);
    debug!(%sentiment, ?directive, round, "resolved turn directive");

    let turn = match directive {
        TurnDirective::Offer => {
            let quote = calculator.quote(remaining, round, sentiment)?;
            let message = match llm
                .compose_offer_line(&OfferLineRequest {
                    player_message: message.to_string(),
                    quote: quote.clone(),
                })
                .await
            {
                // The model's echoed number is advisory; only its prose is
                // kept. The computed amount is the offer.
                Ok(line) => line.message,
                Err(_) => canned_offer_line(quote.amount),
            };
            TurnResult::Offer { quote, message }
        }
        TurnDirective::Conversation => {
            let message = llm
                .compose_conversation_line(&ConversationRequest {
                    player_message: message.to_string(),
                    round,
                    remaining: remaining.to_vec(),
                    sentiment,
                    presentation_style: calculator
                        .tables()
                        .presentation_style(sentiment)
                        .to_string(),
                })
                .await
                .unwrap_or_else(|_| CANNED_CONVERSATION_LINE.to_string());
            TurnResult::Conversation { message }
        }
    };

    Ok(NegotiatedTurn { turn, sentiment })
}

/// Fallback negotiation line when the offer composer is unavailable.
pub(crate) fn canned_offer_line(amount: u64) -> String {
    format!("My offer is ${}. Take it or leave it.", format_amount(amount))
}

/// Formats an amount with thousands separators ("95249" -> "95,249").
pub(crate) fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// ─────────────────────────── Banker copy ───────────────────────────

/// The round-offer headline shown to the player.
pub(crate) fn offer_copy(round: u32, amount: u64, line: &str) -> String {
    format!(
        "**🎯 Round {} Offer**\n\n💰 **My Offer: ${}**\n\n💬 **{}**",
        round,
        format_amount(amount),
        line
    )
}

/// Plain conversational copy.
pub(crate) fn conversation_copy(line: &str) -> String {
    format!("**💬 {}**", line)
}

/// The deal-accepted closing line.
pub(crate) fn deal_accepted_copy(amount: u64) -> String {
    format!(
        "**🎉 DEAL ACCEPTED! 🎉**\n\n💰 **You've won: ${}**\n\n💬 **Congratulations! You made the smart choice and walked away with guaranteed money!**\n\n🎰 **Game Over - Thanks for playing!**",
        format_amount(amount)
    )
}

/// The game-over closing line after a rejected deal.
pub(crate) fn game_over_copy() -> String {
    "**❌ Deal Rejected**\n\n💬 **Your loss! Better luck next time!**\n\n🎰 **Game Over - Thanks for playing!**"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::ScriptedLlm;
    use crate::domain::dialogue::Intent;
    use crate::ports::LlmError;

    const BOARD: [u64; 3] = [1_000, 100_000, 1_000_000];

    #[tokio::test]
    async fn offer_directive_produces_a_quote_and_line() {
        let llm = ScriptedLlm::new()
            .with_sentiment(Sentiment::Confident)
            .with_intent(Intent::Offer)
            .with_offer_line("Take the guaranteed money.");
        let calculator = OfferCalculator::default();

        let negotiated = negotiate(&llm, &calculator, "make me an offer", 1, &BOARD)
            .await
            .unwrap();

        assert_eq!(negotiated.sentiment, Sentiment::Confident);
        let quote = negotiated.turn.quote().expect("offer turn");
        assert!(quote.amount >= 1);
        assert!((quote.amount as f64) < quote.expected_value);
        assert_eq!(negotiated.turn.message(), "Take the guaranteed money.");
    }

    #[tokio::test]
    async fn conversation_directive_quotes_nothing() {
        let llm = ScriptedLlm::new()
            .with_intent(Intent::Conversation)
            .with_conversation_line("Feeling lucky?");

        let negotiated = negotiate(&llm, &OfferCalculator::default(), "hello", 1, &BOARD)
            .await
            .unwrap();

        assert!(negotiated.turn.quote().is_none());
        assert_eq!(negotiated.turn.message(), "Feeling lucky?");
    }

    #[tokio::test]
    async fn dead_model_degrades_to_a_canned_conversation() {
        let llm = ScriptedLlm::always_failing();

        let negotiated = negotiate(&llm, &OfferCalculator::default(), "offer?", 3, &BOARD)
            .await
            .unwrap();

        assert_eq!(negotiated.sentiment, Sentiment::Neutral);
        assert!(negotiated.turn.quote().is_none());
        assert_eq!(negotiated.turn.message(), CANNED_CONVERSATION_LINE);
    }

    #[tokio::test]
    async fn failed_offer_composer_falls_back_to_the_canned_line() {
        let llm = ScriptedLlm::new()
            .with_intent(Intent::Offer)
            .with_offer_line_error(LlmError::network("down"));

        let negotiated = negotiate(&llm, &OfferCalculator::default(), "offer?", 1, &BOARD)
            .await
            .unwrap();

        let quote = negotiated.turn.quote().expect("offer turn");
        assert_eq!(
            negotiated.turn.message(),
            canned_offer_line(quote.amount)
        );
    }

    #[test]
    fn amounts_format_with_separators() {
        assert_eq!(format_amount(0), "0");
        assert_eq!(format_amount(999), "999");
        assert_eq!(format_amount(95_249), "95,249");
        assert_eq!(format_amount(1_000_000), "1,000,000");
    }

    #[test]
    fn offer_copy_carries_round_and_amount() {
        let copy = offer_copy(2, 95_249, "Take it.");
        assert!(copy.contains("Round 2 Offer"));
        assert!(copy.contains("$95,249"));
        assert!(copy.contains("Take it."));
    }
}
