//! Error types for Folio

use thiserror::Error;

/// Result type alias using Folio's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Folio error types with helpful messages
#[derive(Error, Debug)]
pub enum Error {
    #[error("Project {0} not found. Run `folio projects list` to see all projects.")]
    ProjectNotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Media asset error: {0}")]
    Media(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error should surface as a "resource missing" response
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ProjectNotFound(_))
    }
}
