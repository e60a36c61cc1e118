//! Offer calculation.
//!
//! `offer = round(EV x edge(round) x sentiment x variance)`, clamped so the
//! house never offers at or above fair value. The calculator is pure: same
//! inputs, same offer, no I/O.

use serde::Serialize;

use super::{classify_variance, expected_value, NegotiationTables, Sentiment, VarianceClass};
use crate::domain::game::GameError;

/// Snapshot of a computed offer.
///
/// Produced fresh every time an offer is made; prior offers survive only as
/// journal text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfferQuote {
    /// The authoritative offer amount.
    pub amount: u64,
    /// The expected value the offer was computed against.
    pub expected_value: f64,
    /// House-edge multiplier applied for this round.
    pub edge_multiplier: f64,
    /// Withheld fraction of EV, reported to callers (1 - multiplier).
    pub house_edge: f64,
    /// Round the offer belongs to.
    pub round: u32,
    /// Sentiment the offer was computed under.
    pub sentiment: Sentiment,
    /// Variance class of the board at computation time.
    pub variance: VarianceClass,
    /// Pressure-tactic note for this round band.
    pub psychology: String,
    /// Tone direction for the line composer, selected by sentiment.
    pub presentation_style: String,
}

/// Pure offer calculator over an immutable rulebook.
#[derive(Debug, Clone)]
pub struct OfferCalculator {
    tables: NegotiationTables,
}

impl OfferCalculator {
    /// Creates a calculator with the given tables.
    pub fn new(tables: NegotiationTables) -> Self {
        Self { tables }
    }

    /// Returns the rulebook this calculator was built with.
    pub fn tables(&self) -> &NegotiationTables {
        &self.tables
    }

    /// Computes a bounded offer for the given board, round, and sentiment.
    ///
    /// Post-conditions: `amount >= 1`, and `amount < EV` whenever `EV > 1`
    /// (clamped to `ceil(EV) - 1` if the multiplier product would reach it).
    ///
    /// # Errors
    ///
    /// `GameError::InvalidState` if the board is empty (inherited from the
    /// expected-value precondition).
    pub fn quote(
        &self,
        remaining: &[u64],
        round: u32,
        sentiment: Sentiment,
    ) -> Result<OfferQuote, GameError> {
        let ev = expected_value(remaining)?;
        let variance = classify_variance(
            remaining,
            self.tables.high_amount_threshold,
            self.tables.dominance_ratio,
        );

        let edge_multiplier = self.tables.edge_multiplier(round);
        let raw = ev
            * edge_multiplier
            * self.tables.sentiment_multiplier(sentiment)
            * self.tables.variance_multiplier(variance);

        let cap = (ev.ceil() as u64).saturating_sub(1).max(1);
        let amount = (raw.round() as u64).clamp(1, cap);

        Ok(OfferQuote {
            amount,
            expected_value: ev,
            edge_multiplier,
            house_edge: self.tables.house_edge(round),
            round,
            sentiment,
            variance,
            psychology: self.tables.pressure_tactic(round).to_string(),
            presentation_style: self.tables.presentation_style(sentiment).to_string(),
        })
    }
}

impl Default for OfferCalculator {
    fn default() -> Self {
        Self::new(NegotiationTables::default())
    }
}
