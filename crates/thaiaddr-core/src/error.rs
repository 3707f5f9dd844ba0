// crates/thaiaddr-core/src/error.rs
use thiserror::Error;

/// Errors raised while loading a feed or a snapshot.
///
/// Only the load step can fail. Once an [`AddressDb`](crate::AddressDb)
/// exists every query is total and returns empty results instead.
#[derive(Debug, Error)]
pub enum AddrError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary snapshot error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("feed contained no records")]
    EmptyFeed,

    #[cfg(feature = "fetch")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, AddrError>;
