//! Error types for the Giphy API client.

use thiserror::Error;

/// Main error type for the Giphy client.
#[derive(Error, Debug)]
pub enum Error {
    /// A required argument was empty. No request was sent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The request could not be sent (DNS, connect, timeout).
    #[error("Transport error: {source}: {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a status other than 200.
    #[error("API returned an error: {status}: {url}")]
    Api { status: String, url: String },

    /// Reading the body of a successful response failed.
    #[error("Error reading response body: {source}: {url}")]
    Io {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not the expected JSON.
    #[error("Decode error: {source}: {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL is not a valid URL.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Result type alias for Giphy operations.
pub type Result<T> = std::result::Result<T, Error>;
