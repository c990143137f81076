use std::io;

/// Canonical result type for Bylines code
pub type Result<T> = std::result::Result<T, BylinesError>;

/// Common error type for Bylines operations
#[derive(Debug, thiserror::Error)]
pub enum BylinesError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("History error: {0}")]
    History(String),
}
