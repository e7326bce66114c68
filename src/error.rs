use std::path::PathBuf;

use canvas::error::SceneError;

/// Errors surfaced by the `atlas` host.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("cannot read {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("cannot write {path}: {source}")]
    Write { path: PathBuf, source: std::io::Error },
    #[error("invalid JSON in {path}: {source}")]
    Json { path: PathBuf, source: serde_json::Error },
    #[error("{path} line {line}: {message}")]
    Script { path: PathBuf, line: usize, message: String },
    #[error("no inventory record for `{0}`")]
    NotFound(String),
    #[error(transparent)]
    Scene(#[from] SceneError),
    #[error("cannot encode layout: {0}")]
    Encode(#[from] serde_json::Error),
}
