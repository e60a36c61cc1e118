//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Offer multiplier {0} must lie in (0, 1)")]
    InvalidEdgeMultiplier(&'static str),

    #[error("Adjustment multiplier {0} must be positive")]
    InvalidAdjustmentMultiplier(&'static str),

    #[error("High-amount threshold must be positive")]
    InvalidHighAmountThreshold,

    #[error("Dominance ratio must exceed 1.0")]
    InvalidDominanceRatio,
}
