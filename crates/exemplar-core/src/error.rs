//! Error types for Exemplar

use thiserror::Error;

/// Main error type for Exemplar
#[derive(Error, Debug)]
pub enum ExemplarError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

pub type Result<T> = std::result::Result<T, ExemplarError>;
