//! Negotiation rulebook configuration
//!
//! Every multiplier and threshold of the offer engine is a tunable here,
//! with defaults matching the reference rulebook. `tables()` materializes
//! the immutable `NegotiationTables` the calculator is built with.

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::negotiation::NegotiationTables;

/// Negotiation rulebook configuration
#[derive(Debug, Clone, Deserialize)]
pub struct NegotiationConfig {
    /// Offer multipliers per round band (offer = EV x multiplier)
    #[serde(default = "default_early_round_multiplier")]
    pub early_round_multiplier: f64,
    #[serde(default = "default_mid_round_multiplier")]
    pub mid_round_multiplier: f64,
    #[serde(default = "default_late_round_multiplier")]
    pub late_round_multiplier: f64,

    /// Sentiment adjustment multipliers
    #[serde(default = "default_confident_multiplier")]
    pub confident_multiplier: f64,
    #[serde(default = "default_desperate_multiplier")]
    pub desperate_multiplier: f64,
    #[serde(default = "default_neutral_multiplier")]
    pub neutral_multiplier: f64,
    #[serde(default = "default_aggressive_multiplier")]
    pub aggressive_multiplier: f64,

    /// Variance adjustment multipliers
    #[serde(default = "default_high_variance_multiplier")]
    pub high_variance_multiplier: f64,
    #[serde(default = "default_medium_variance_multiplier")]
    pub medium_variance_multiplier: f64,
    #[serde(default = "default_low_variance_multiplier")]
    pub low_variance_multiplier: f64,

    /// Variance-classification tunables
    #[serde(default = "default_high_amount_threshold")]
    pub high_amount_threshold: u64,
    #[serde(default = "default_dominance_ratio")]
    pub dominance_ratio: f64,

    /// Pressure-tactic copy per round band
    #[serde(default = "default_early_game_tactic")]
    pub early_game_tactic: String,
    #[serde(default = "default_mid_game_tactic")]
    pub mid_game_tactic: String,
    #[serde(default = "default_late_game_tactic")]
    pub late_game_tactic: String,

    /// Presentation-style copy per sentiment
    #[serde(default = "default_confident_style")]
    pub confident_style: String,
    #[serde(default = "default_desperate_style")]
    pub desperate_style: String,
    #[serde(default = "default_neutral_style")]
    pub neutral_style: String,
}

impl NegotiationConfig {
    /// Materializes the immutable rulebook for the offer calculator.
    pub fn tables(&self) -> NegotiationTables {
        NegotiationTables {
            early_round_multiplier: self.early_round_multiplier,
            mid_round_multiplier: self.mid_round_multiplier,
            late_round_multiplier: self.late_round_multiplier,
            confident_multiplier: self.confident_multiplier,
            desperate_multiplier: self.desperate_multiplier,
            neutral_multiplier: self.neutral_multiplier,
            aggressive_multiplier: self.aggressive_multiplier,
            high_variance_multiplier: self.high_variance_multiplier,
            medium_variance_multiplier: self.medium_variance_multiplier,
            low_variance_multiplier: self.low_variance_multiplier,
            high_amount_threshold: self.high_amount_threshold,
            dominance_ratio: self.dominance_ratio,
            early_game_tactic: self.early_game_tactic.clone(),
            mid_game_tactic: self.mid_game_tactic.clone(),
            late_game_tactic: self.late_game_tactic.clone(),
            confident_style: self.confident_style.clone(),
            desperate_style: self.desperate_style.clone(),
            neutral_style: self.neutral_style.clone(),
        }
    }

    /// Validate negotiation configuration
    ///
    /// The edge multipliers must keep offers strictly below EV; the
    /// adjustment multipliers only need to be positive (the calculator
    /// clamps the final amount).
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (value, name) in [
            (self.early_round_multiplier, "early_round_multiplier"),
            (self.mid_round_multiplier, "mid_round_multiplier"),
            (self.late_round_multiplier, "late_round_multiplier"),
        ] {
            if !(value > 0.0 && value < 1.0) {
                return Err(ValidationError::InvalidEdgeMultiplier(name));
            }
        }

        for (value, name) in [
            (self.confident_multiplier, "confident_multiplier"),
            (self.desperate_multiplier, "desperate_multiplier"),
            (self.neutral_multiplier, "neutral_multiplier"),
            (self.aggressive_multiplier, "aggressive_multiplier"),
            (self.high_variance_multiplier, "high_variance_multiplier"),
            (self.medium_variance_multiplier, "medium_variance_multiplier"),
            (self.low_variance_multiplier, "low_variance_multiplier"),
        ] {
            if value <= 0.0 {
                return Err(ValidationError::InvalidAdjustmentMultiplier(name));
            }
        }

        if self.high_amount_threshold == 0 {
            return Err(ValidationError::InvalidHighAmountThreshold);
        }
        if self.dominance_ratio <= 1.0 {
            return Err(ValidationError::InvalidDominanceRatio);
        }
        Ok(())
    }
}

impl Default for NegotiationConfig {
    fn default() -> Self {
        Self {
            early_round_multiplier: default_early_round_multiplier(),
            mid_round_multiplier: default_mid_round_multiplier(),
            late_round_multiplier: default_late_round_multiplier(),
            confident_multiplier: default_confident_multiplier(),
            desperate_multiplier: default_desperate_multiplier(),
            neutral_multiplier: default_neutral_multiplier(),
            aggressive_multiplier: default_aggressive_multiplier(),
            high_variance_multiplier: default_high_variance_multiplier(),
            medium_variance_multiplier: default_medium_variance_multiplier(),
            low_variance_multiplier: default_low_variance_multiplier(),
            high_amount_threshold: default_high_amount_threshold(),
            dominance_ratio: default_dominance_ratio(),
            early_game_tactic: default_early_game_tactic(),
            mid_game_tactic: default_mid_game_tactic(),
            late_game_tactic: default_late_game_tactic(),
            confident_style: default_confident_style(),
            desperate_style: default_desperate_style(),
            neutral_style: default_neutral_style(),
        }
    }
}

fn default_early_round_multiplier() -> f64 {
    0.65
}

fn default_mid_round_multiplier() -> f64 {
    0.75
}

fn default_late_round_multiplier() -> f64 {
    0.85
}

fn default_confident_multiplier() -> f64 {
    1.05
}

fn default_desperate_multiplier() -> f64 {
    0.95
}

fn default_neutral_multiplier() -> f64 {
    1.0
}

fn default_aggressive_multiplier() -> f64 {
    0.90
}

fn default_high_variance_multiplier() -> f64 {
    0.90
}

fn default_medium_variance_multiplier() -> f64 {
    1.0
}

fn default_low_variance_multiplier() -> f64 {
    1.05
}

fn default_high_amount_threshold() -> u64 {
    100_000
}

fn default_dominance_ratio() -> f64 {
    3.0
}

fn default_early_game_tactic() -> String {
    "tease about big amounts ahead".to_string()
}

fn default_mid_game_tactic() -> String {
    "emphasize risk of losing everything".to_string()
}

fn default_late_game_tactic() -> String {
    "highlight guaranteed money vs risk".to_string()
}

fn default_confident_style() -> String {
    "playful and challenging".to_string()
}

fn default_desperate_style() -> String {
    "cold and calculating".to_string()
}

fn default_neutral_style() -> String {
    "professional and persuasive".to_string()
}
