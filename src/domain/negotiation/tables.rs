//! Negotiation tables - the banker's tunable rulebook.
//!
//! All multipliers and pressure text live here as an immutable value that is
//! handed to the offer calculator at construction time. Lookups never fail:
//! an unrecognized round, sentiment, or variance class degrades to the
//! neutral/medium/mid-round defaults instead of raising.

use super::{Sentiment, VarianceClass};
use serde::{Deserialize, Serialize};

/// Round bands used for house-edge and pressure-tactic selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundBand {
    /// Rounds 1-2.
    Early,
    /// Rounds 3-4.
    Mid,
    /// Rounds 5 and above.
    Late,
}

impl RoundBand {
    /// Maps a round number to its band. Round 0 is treated as round 1.
    pub fn from_round(round: u32) -> Self {
        match round {
            0..=2 => RoundBand::Early,
            3..=4 => RoundBand::Mid,
            _ => RoundBand::Late,
        }
    }
}

/// Immutable configuration tables for offer negotiation.
///
/// Defaults mirror the reference rulebook; deployments override values
/// through `NegotiationConfig`.
#[derive(Debug, Clone, PartialEq)]
pub struct NegotiationTables {
    /// House-edge multiplier per round band (offer = EV x multiplier).
    pub early_round_multiplier: f64,
    pub mid_round_multiplier: f64,
    pub late_round_multiplier: f64,

    /// Sentiment adjustment multipliers.
    pub confident_multiplier: f64,
    pub desperate_multiplier: f64,
    pub neutral_multiplier: f64,
    pub aggressive_multiplier: f64,

    /// Variance adjustment multipliers.
    pub high_variance_multiplier: f64,
    pub medium_variance_multiplier: f64,
    pub low_variance_multiplier: f64,

    /// Variance-classification tunables.
    pub high_amount_threshold: u64,
    pub dominance_ratio: f64,

    /// Psychological pressure tactic per round band.
    pub early_game_tactic: String,
    pub mid_game_tactic: String,
    pub late_game_tactic: String,

    /// Offer presentation style per player sentiment, fed to the line
    /// composer as tone direction.
    pub confident_style: String,
    pub desperate_style: String,
    pub neutral_style: String,
}

impl Default for NegotiationTables {
    fn default() -> Self {
        Self {
            early_round_multiplier: 0.65,
            mid_round_multiplier: 0.75,
            late_round_multiplier: 0.85,

            confident_multiplier: 1.05,
            desperate_multiplier: 0.95,
            neutral_multiplier: 1.0,
            aggressive_multiplier: 0.90,

            high_variance_multiplier: 0.90,
            medium_variance_multiplier: 1.0,
            low_variance_multiplier: 1.05,

            high_amount_threshold: 100_000,
            dominance_ratio: 3.0,

            early_game_tactic: "tease about big amounts ahead".to_string(),
            mid_game_tactic: "emphasize risk of losing everything".to_string(),
            late_game_tactic: "highlight guaranteed money vs risk".to_string(),

            confident_style: "playful and challenging".to_string(),
            desperate_style: "cold and calculating".to_string(),
            neutral_style: "professional and persuasive".to_string(),
        }
    }
}

impl NegotiationTables {
    /// House-edge multiplier for a round.
    pub fn edge_multiplier(&self, round: u32) -> f64 {
        match RoundBand::from_round(round) {
            RoundBand::Early => self.early_round_multiplier,
            RoundBand::Mid => self.mid_round_multiplier,
            RoundBand::Late => self.late_round_multiplier,
        }
    }

    /// House edge reported to callers: the withheld fraction of EV.
    pub fn house_edge(&self, round: u32) -> f64 {
        1.0 - self.edge_multiplier(round)
    }

    /// Sentiment adjustment multiplier.
    pub fn sentiment_multiplier(&self, sentiment: Sentiment) -> f64 {
        match sentiment {
            Sentiment::Confident => self.confident_multiplier,
            Sentiment::Desperate => self.desperate_multiplier,
            Sentiment::Neutral => self.neutral_multiplier,
            Sentiment::Aggressive => self.aggressive_multiplier,
        }
    }

    /// Variance adjustment multiplier.
    pub fn variance_multiplier(&self, variance: VarianceClass) -> f64 {
        match variance {
            VarianceClass::High => self.high_variance_multiplier,
            VarianceClass::Medium => self.medium_variance_multiplier,
            VarianceClass::Low => self.low_variance_multiplier,
        }
    }

    /// Pressure tactic line for a round, used as the psychology note.
    pub fn pressure_tactic(&self, round: u32) -> &str {
        match RoundBand::from_round(round) {
            RoundBand::Early => &self.early_game_tactic,
            RoundBand::Mid => &self.mid_game_tactic,
            RoundBand::Late => &self.late_game_tactic,
        }
    }

    /// Presentation style for a sentiment, handed to the line composer.
    /// Aggressive has no dedicated style and reads as neutral.
    pub fn presentation_style(&self, sentiment: Sentiment) -> &str {
        match sentiment {
            Sentiment::Confident => &self.confident_style,
            Sentiment::Desperate => &self.desperate_style,
            Sentiment::Neutral | Sentiment::Aggressive => &self.neutral_style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_bands_follow_the_rulebook() {
        assert_eq!(RoundBand::from_round(1), RoundBand::Early);
        assert_eq!(RoundBand::from_round(2), RoundBand::Early);
        assert_eq!(RoundBand::from_round(3), RoundBand::Mid);
        assert_eq!(RoundBand::from_round(4), RoundBand::Mid);
        assert_eq!(RoundBand::from_round(5), RoundBand::Late);
        assert_eq!(RoundBand::from_round(12), RoundBand::Late);
    }

    #[test]
    fn round_zero_is_treated_as_early() {
        assert_eq!(RoundBand::from_round(0), RoundBand::Early);
    }

    #[test]
    fn default_edge_multipliers() {
        let tables = NegotiationTables::default();
        assert_eq!(tables.edge_multiplier(1), 0.65);
        assert_eq!(tables.edge_multiplier(2), 0.65);
        assert_eq!(tables.edge_multiplier(3), 0.75);
        assert_eq!(tables.edge_multiplier(4), 0.75);
        assert_eq!(tables.edge_multiplier(5), 0.85);
        assert_eq!(tables.edge_multiplier(9), 0.85);
    }

    #[test]
    fn house_edge_is_complement_of_multiplier() {
        let tables = NegotiationTables::default();
        assert!((tables.house_edge(1) - 0.35).abs() < 1e-9);
        assert!((tables.house_edge(3) - 0.25).abs() < 1e-9);
        assert!((tables.house_edge(7) - 0.15).abs() < 1e-9);
    }

    #[test]
    fn default_sentiment_multipliers() {
        let tables = NegotiationTables::default();
        assert_eq!(tables.sentiment_multiplier(Sentiment::Confident), 1.05);
        assert_eq!(tables.sentiment_multiplier(Sentiment::Desperate), 0.95);
        assert_eq!(tables.sentiment_multiplier(Sentiment::Neutral), 1.0);
        assert_eq!(tables.sentiment_multiplier(Sentiment::Aggressive), 0.90);
    }

    #[test]
    fn default_variance_multipliers() {
        let tables = NegotiationTables::default();
        assert_eq!(tables.variance_multiplier(VarianceClass::High), 0.90);
        assert_eq!(tables.variance_multiplier(VarianceClass::Medium), 1.0);
        assert_eq!(tables.variance_multiplier(VarianceClass::Low), 1.05);
    }

    #[test]
    fn unknown_sentiment_label_behaves_like_neutral() {
        let tables = NegotiationTables::default();
        let parsed = Sentiment::from_label("belligerent");
        assert_eq!(
            tables.sentiment_multiplier(parsed),
            tables.sentiment_multiplier(Sentiment::Neutral)
        );
    }

    #[test]
    fn presentation_styles_follow_sentiment() {
        let tables = NegotiationTables::default();
        assert_eq!(
            tables.presentation_style(Sentiment::Confident),
            "playful and challenging"
        );
        assert_eq!(
            tables.presentation_style(Sentiment::Desperate),
            "cold and calculating"
        );
        assert_eq!(
            tables.presentation_style(Sentiment::Neutral),
            "professional and persuasive"
        );
        // No dedicated aggressive style; the lookup degrades to neutral.
        assert_eq!(
            tables.presentation_style(Sentiment::Aggressive),
            tables.presentation_style(Sentiment::Neutral)
        );
    }

    #[test]
    fn pressure_tactics_follow_round_bands() {
        let tables = NegotiationTables::default();
        assert_eq!(tables.pressure_tactic(1), "tease about big amounts ahead");
        assert_eq!(tables.pressure_tactic(4), "emphasize risk of losing everything");
        assert_eq!(tables.pressure_tactic(6), "highlight guaranteed money vs risk");
    }
}
