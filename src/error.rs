//! Error types for the Solcast client
//!
//! Failures the Solcast API reports itself (bad parameters, unknown resource ids, ...) are
//! not errors: they are carried by [`SolcastResponse`](crate::response::SolcastResponse).
//! This type only covers conditions that prevent a response from being produced or used.
use std::time::Duration;

/// Errors returned by the Solcast client.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Invalid combination of request arguments, detected before any network call
    #[error("invalid request: {0}")]
    Validation(String),

    /// Response body is not valid JSON
    #[error("failed to decode response body: {0}")]
    Decode(String),

    /// Response does not carry the expected time series, or the request failed
    #[error("unexpected response shape: {0}")]
    Shape(String),

    /// Connection, DNS or URL failure; no response was received
    #[error("transport failure: {0}")]
    Transport(String),

    /// No response within the configured timeout
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// `SOLCAST_API_KEY` is not set
    #[error("SOLCAST_API_KEY not found in environment or .env file")]
    MissingApiKey,

    /// Polars failed to assemble the tabular view
    #[cfg(feature = "table")]
    #[error("failed to build table: {0}")]
    Table(#[from] polars_core::error::PolarsError),
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Transport(format!("HTTP request failed: {e}"))
    }
}
