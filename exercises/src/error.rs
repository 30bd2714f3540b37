use thiserror::Error;

/// Errors returned by exercise functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExerciseError {
    #[error("at least two colors are required")]
    NotEnoughColors,

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("random source failed: {0}")]
    Random(String),
}
