use thiserror::Error;

/// Validation failures for out-of-domain inputs.
///
/// Degenerate-but-in-domain inputs (empty histories, zero totals) never
/// error; each operation documents its defined default instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("response quality must be in 0..=5, got {0}")]
    InvalidQuality(i64),

    #[error("difficulty must be in 1..=10, got {0}")]
    InvalidDifficulty(i64),

    #[error("unknown item type: {0}")]
    UnknownItemType(String),

    #[error("recommendation limit must be at least 1")]
    InvalidLimit,
}
