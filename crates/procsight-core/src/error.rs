use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ProcsightError {
    #[error("failed to load rulebook from {path}: {reason}")]
    RulebookLoad { path: PathBuf, reason: String },

    #[error("invalid rulebook: {0}")]
    RulebookInvalid(String),

    #[error("invalid input: {0}. Expected a JSON array of record objects.")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
