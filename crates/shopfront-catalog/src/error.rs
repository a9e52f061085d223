//! Error handling for catalog API operations.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Common error type for catalog API operations.
///
/// Every failure of the query layer is one of these; callers that only
/// surface a message use the [`Display`](std::fmt::Display) form, while the
/// status code and body remain available on the variants that have them.
#[derive(Debug, Error)]
pub enum CatalogClientError {
    /// The wait for a response exceeded the configured bound.
    /// Carries no status code because no response arrived.
    #[error("request timed out")]
    Timeout,
    /// The server responded with a non-2xx status.
    #[error("{}", fmt_error_response(.status, .message))]
    ErrorResponse {
        status: StatusCode,
        /// `message` field of the response body, when one was present.
        message: Option<String>,
        /// The response body, when it parsed as JSON.
        body: Option<Value>,
    },
    /// The transport itself failed before any response arrived.
    #[error("{0}")]
    Transport(#[source] reqwest::Error),
    /// A 2xx response carried a payload the wire types couldn't decode.
    #[error("failed to deserialize catalog response")]
    Deserialize(#[source] reqwest::Error),
    /// The configured base URL or a derived endpoint URL is invalid.
    #[error("invalid catalog URL")]
    Url(#[source] url::ParseError),
    #[error("{}", .0)]
    Other(String),
}

fn fmt_error_response(status: &StatusCode, message: &Option<String>) -> String {
    match message {
        Some(message) => format!("{status}: {message}"),
        None => format!("{status}"),
    }
}
