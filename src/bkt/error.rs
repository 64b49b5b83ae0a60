use thiserror::Error;

/// Typed, recoverable failures surfaced by the core. None are fatal; the host
/// maps them onto boundary responses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Malformed numeric input, e.g. a negative latency.
    #[error("invalid input: {0}")]
    Validation(String),

    /// The answer references an exercise id absent from the pool.
    #[error("unknown exercise: {0}")]
    UnknownExercise(String),

    /// Selection exhausted the pool under the current constraints.
    #[error("no exercise available under current constraints")]
    NoExerciseAvailable,
}
