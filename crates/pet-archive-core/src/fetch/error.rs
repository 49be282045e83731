//! Fetch error type.

use std::path::PathBuf;
use thiserror::Error;

/// Why a resource could not be fetched as text.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Local read failed (missing file, permission denied, invalid UTF-8).
    #[error("read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Curl reported an error (connection refused, DNS, timeout, etc.).
    #[error("transfer failed: {0}")]
    Curl(#[from] curl::Error),
    /// Server answered with a non-2xx status.
    #[error("GET {url} returned HTTP {status}")]
    Http { url: String, status: u32 },
    /// Response body was not valid UTF-8.
    #[error("response from {url} is not valid UTF-8")]
    Utf8 {
        url: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
    /// Source string names a scheme we cannot fetch.
    #[error("unsupported resource location: {0}")]
    UnsupportedScheme(String),
    /// Blocking fetch task panicked or was cancelled.
    #[error("fetch task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
