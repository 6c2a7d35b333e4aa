use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum XatagError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("store error: {0}")]
    Store(String),

    #[error("cannot access '{}': {source}", path.display())]
    File {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, XatagError>;
