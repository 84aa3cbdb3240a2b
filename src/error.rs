//! Error taxonomy shared by every layer of the scanner.
//!
//! Upstream failures of any kind (transport, authentication, rate limits, unknown
//! ids, undecodable payloads) collapse into [`ScanError::RemoteApi`]. Problems with
//! the data itself, such as a malformed catalog id or a reduction requested for a
//! track without audio features, are reported as [`ScanError::Validation`].
//!
//! No layer retries or skips: whichever error surfaces first aborts the scan.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// Any failure reported by, or while talking to, the Spotify Web API.
    #[error("Remote API error: {0}")]
    RemoteApi(String),

    /// Input or intermediate data that cannot be turned into a record.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Missing or unusable configuration (credentials, endpoints).
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ScanError {
    fn from(err: reqwest::Error) -> Self {
        ScanError::RemoteApi(err.to_string())
    }
}

impl ScanError {
    pub fn remote(message: impl Into<String>) -> Self {
        ScanError::RemoteApi(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ScanError::Validation(message.into())
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, ScanError::RemoteApi(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ScanError::Validation(_))
    }
}
