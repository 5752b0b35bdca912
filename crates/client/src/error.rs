//! Transport errors.
//!
//! Every variant is terminal for the request that produced it; nothing here
//! is retried.

use std::path::PathBuf;

/// Result alias for transport calls.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a backend call failed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request never completed.
    #[error("connection failed: {0}")]
    Network(String),
    /// The backend answered with an `error` or `detail` message.
    #[error("{0}")]
    Backend(String),
    /// Non-2xx status without a readable error body.
    #[error("backend returned status {0}")]
    Status(u16),
    /// The body was not the expected JSON.
    #[error("malformed response: {0}")]
    Malformed(String),
    /// The body parsed but a required field was absent or empty.
    #[error("response has no `{0}`")]
    Missing(&'static str),
    /// A local file could not be read for upload.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Whether the backend was unreachable.
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network(_))
    }

    /// The backend's own message, if it sent one.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Error::Backend(message) => Some(message),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Malformed(err.to_string())
        } else {
            Error::Network(err.to_string())
        }
    }
}
