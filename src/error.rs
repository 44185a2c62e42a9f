//! Error types for the coin price client

use thiserror::Error;

/// Errors that can occur when fetching prices from the API
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, timeout or non-success HTTP status
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Response carried no body
    #[error("Empty response")]
    EmptyResponse,

    /// Body could not be read to completion
    #[error("Failed to read response: {0}")]
    Read(#[source] reqwest::Error),

    /// Body is not valid JSON
    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// JSON is valid but lacks the expected object, array or field
    #[error("Unexpected response shape: {0}")]
    Shape(String),

    /// Coin identifier was empty
    #[error("Coin id must not be empty")]
    InvalidCoinId,

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The blocking client's runtime could not be started
    #[error("Failed to start runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

impl FetchError {
    /// Creates a Shape error
    pub fn shape(msg: impl Into<String>) -> Self {
        Self::Shape(msg.into())
    }
}
