//! Error types for the Spine.AI API client.
//!
//! # Design
//! One tagged variant per failure kind so callers branch on the kind rather
//! than on message text. `Http` keeps the status code next to the status
//! text; the response body is intentionally not carried because it is never
//! read on the failure path.

/// Errors returned by `ApiClient` operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No authenticated session, or the session has no access token.
    #[error("No active session")]
    NoSession,

    /// The server answered with a status outside 200-299.
    #[error("API error: {status_text}")]
    Http { status: u16, status_text: String },

    /// The success body was not valid JSON for the requested type.
    #[error("failed to decode response body: {0}")]
    Decode(String),

    /// The request body could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Encode(String),

    /// The round trip itself failed (DNS, refused connection, timeout, ...).
    #[error("transport error: {0}")]
    Transport(String),
}

/// Errors raised while reading client configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be an http(s) URL, got '{value}'")]
    InvalidUrl { var: &'static str, value: String },
}
