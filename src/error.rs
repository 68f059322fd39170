use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Invalid project ID format: {0}")]
    InvalidProjectId(String),

    #[error("Unknown lane: {0}")]
    InvalidLane(String),

    #[error("Unknown project status: {0}")]
    InvalidStatus(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl BoardError {
    pub(crate) fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
