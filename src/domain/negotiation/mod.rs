//! Offer negotiation engine.
//!
//! Pure computation only: expected value, variance classification, and the
//! bounded offer calculation over an immutable rulebook. Nothing in this
//! module performs I/O or blocks.

mod expected_value;
mod offer;
mod sentiment;
mod tables;
mod variance;

pub use expected_value::expected_value;
pub use offer::{OfferCalculator, OfferQuote};
pub use sentiment::Sentiment;
pub use tables::{NegotiationTables, RoundBand};
pub use variance::{classify_variance, VarianceClass};
