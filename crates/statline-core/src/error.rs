use thiserror::Error;

/// Validation and contract errors exposed by `statline-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("target date must be month/day/year: '{value}'")]
    InvalidDate { value: String },

    #[error("hemisphere must be 'N' or 'S': '{value}'")]
    InvalidHemisphere { value: String },

    #[error("identifier cannot be empty")]
    EmptyId,
    #[error("group name cannot be empty")]
    EmptyGroupName,
    #[error("stat title cannot be empty")]
    EmptyTitle,
    #[error("symbol cannot be empty")]
    EmptySymbol,

    #[error("timestamp must be RFC3339 UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },

    #[error("stat update must keep the '{expected}' value variant, got '{submitted}'")]
    ValueVariantMismatch {
        expected: &'static str,
        submitted: &'static str,
    },

    #[error("schedule interval must be greater than zero")]
    ZeroInterval,
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
