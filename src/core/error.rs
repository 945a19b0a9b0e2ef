use thiserror::Error;

/// Failures while reading effect configuration out of page markup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FxError {
    #[error("counter element has no data-count attribute")]
    MissingCount,
    #[error("counter target {0:?} is not a non-negative integer")]
    InvalidCount(String),
}
