//! Variance classification of the remaining prize board.
//!
//! The class captures "big amounts still alive" drama: a board dominated by
//! a few large outliers reads as high variance, a board of uniformly small
//! amounts as low, everything in between as medium. The thresholds are
//! policy tunables carried in [`NegotiationTables`](super::NegotiationTables),
//! not laws of the game.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative spread bucket for the remaining amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VarianceClass {
    High,
    #[default]
    Medium,
    Low,
}

impl VarianceClass {
    /// Returns the canonical label string.
    pub fn as_label(&self) -> &'static str {
        match self {
            VarianceClass::High => "high",
            VarianceClass::Medium => "medium",
            VarianceClass::Low => "low",
        }
    }
}

impl fmt::Display for VarianceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

/// Classifies the remaining board into a variance bucket.
///
/// Rules, in order:
/// - no amount reaches `high_amount_threshold` → `Low`
/// - the maximum amount is at least `dominance_ratio` times the mean → `High`
/// - otherwise → `Medium`
///
/// An empty board classifies as `Medium`; the expected-value precondition
/// upstream rejects empty boards before the class is ever used.
pub fn classify_variance(
    remaining: &[u64],
    high_amount_threshold: u64,
    dominance_ratio: f64,
) -> VarianceClass {
    let Some(&max) = remaining.iter().max() else {
        return VarianceClass::Medium;
    };

    if max < high_amount_threshold {
        return VarianceClass::Low;
    }

    let mean = remaining.iter().sum::<u64>() as f64 / remaining.len() as f64;
    if max as f64 >= dominance_ratio * mean {
        VarianceClass::High
    } else {
        VarianceClass::Medium
    }
}
