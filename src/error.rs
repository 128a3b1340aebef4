use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocstringError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Glob error: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("Continuation line {line} appears before any key")]
    OrphanContinuation { line: usize },

    #[error("Missing configuration key: {0}")]
    MissingKey(String),

    #[error("Conversion of {} failed: {reason}", input.display())]
    Conversion { input: PathBuf, reason: String },

    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, DocstringError>;
