//! Application error types.
//!
//! Provides unified error handling with actionable context for debugging.

use thiserror::Error;

use crate::markov::GenerationError;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// Could not reach the API host
    #[error("Unable to connect to API host: {0}")]
    Connection(String),

    /// Transport-level HTTP failure, or a non-success HTTP response
    #[error("An HTTP error has occurred: {message}")]
    Http {
        /// Human-readable error description.
        message: String,
        /// HTTP status code, if from an HTTP response.
        status: Option<u16>,
    },

    /// Request URL could not be built
    #[error("Invalid URL -> {0}")]
    InvalidUrl(String),

    /// Redirect limit exceeded
    #[error("Too many redirects")]
    TooManyRedirects,

    /// Request did not complete in time
    #[error("Timeout")]
    Timeout,

    /// Musixmatch reported a failure inside a successful HTTP response
    #[error("API error -> {url} ({status_code})")]
    ApiStatus {
        /// Endpoint that was called.
        url: String,
        /// Status code from the response envelope header.
        status_code: i64,
        /// Actionable suggestion for resolving the error.
        hint: Option<&'static str>,
    },

    /// Response body did not have the expected shape
    #[error("Invalid JSON response: {0}")]
    Parse(String),

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Song generation failed
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl Error {
    /// Create an API status error with an actionable hint where one is known
    pub fn api_status(url: impl Into<String>, status_code: i64) -> Self {
        // Musixmatch documents these envelope codes.
        let hint = match status_code {
            400 => Some("The request had bad syntax or was inherently impossible to be satisfied"),
            401 => Some("Check the MUSIXMATCH_API_KEY value or the --apikey flag"),
            402 => Some("The daily usage limit for this API key has been reached"),
            403 => Some("This API key is not authorized for the operation"),
            404 => Some("The artist or track was not found"),
            405 => Some("The requested method was not found"),
            500..=599 => Some("Musixmatch server error - try again later"),
            _ => None,
        };
        Self::ApiStatus { url: url.into(), status_code, hint }
    }

    /// Create an HTTP error from a non-success response
    pub fn http_status(url: &str, status: reqwest::StatusCode) -> Self {
        Self::Http {
            message: format!(
                "API error -> {url} ({})",
                status.canonical_reason().unwrap_or("unknown reason")
            ),
            status: Some(status.as_u16()),
        }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Classify a failed request into the matching transport error
    pub fn from_request(url: &str, err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_redirect() {
            Self::TooManyRedirects
        } else if err.is_builder() {
            Self::InvalidUrl(url.to_string())
        } else if err.is_connect() {
            Self::Connection(err.to_string())
        } else if err.is_status() {
            Self::Http { message: err.to_string(), status: err.status().map(|s| s.as_u16()) }
        } else if err.is_decode() {
            Self::Parse(err.to_string())
        } else {
            Self::Connection(err.to_string())
        }
    }
}
