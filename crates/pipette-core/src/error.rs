use thiserror::Error;

/// Top-level error type for the pipette crates.
///
/// `Pipe` itself never produces one of these; a failing step's error is
/// returned to the caller exactly as the step produced it.
#[derive(Debug, Error)]
pub enum PipetteError {
    #[error("Typing error: {0}")]
    Typing(#[from] TypingError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TypingError {
    #[error("Empty sequence: no first element")]
    EmptySequence,

    #[error("Division by zero: {dividend} / 0")]
    DivisionByZero { dividend: f64 },
}

pub type Result<T> = std::result::Result<T, PipetteError>;
