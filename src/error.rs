//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.
//!
//! Note that a non-success status from the Blip API is NOT an error here:
//! the remote body is relayed to the caller as-is. Only failures that
//! prevent a remote response from being produced at all (connection
//! errors, undecodable bodies, missing sample data) land in this enum.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// This enum represents all possible errors that can occur in the application.
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Error Categories
///
/// - **Upstream Errors**: The Blip API could not be reached or returned an undecodable body
/// - **Workflow Errors**: The scripted workflow could not proceed (missing batch_id, poll timeout)
/// - **Sample Data Errors**: The bundled JSON fixture files could not be read or parsed
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A request to the Blip API failed before a JSON body could be produced
    /// (connection refused, timeout, body was not valid JSON).
    ///
    /// This wraps any reqwest::Error using the `#[from]` attribute, which
    /// automatically implements `From<reqwest::Error> for AppError`.
    ///
    /// Returns HTTP 502 Bad Gateway.
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// The batch status poll exhausted all attempts without ever seeing
    /// a "complete" status.
    ///
    /// Returns HTTP 504 Gateway Timeout.
    #[error("transactions were not all processed before timeout")]
    BatchTimeout,

    /// Creating transactions did not return a `batch_id`, so the workflow
    /// has nothing to poll on and stops immediately.
    ///
    /// Returns HTTP 502 Bad Gateway.
    #[error("no batch_id received from creating transactions")]
    MissingBatchId,

    /// A sample data file could not be read from disk.
    ///
    /// Returns HTTP 500 Internal Server Error.
    #[error("Failed to read sample data: {0}")]
    FixtureIo(#[from] std::io::Error),

    /// A sample data file was not valid JSON.
    ///
    /// Returns HTTP 500 Internal Server Error.
    #[error("Failed to parse sample data: {0}")]
    FixtureParse(#[from] serde_json::Error),
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `Upstream` → 502 Bad Gateway
/// - `BatchTimeout` → 504 Gateway Timeout
/// - `MissingBatchId` → 502 Bad Gateway
/// - `FixtureIo` / `FixtureParse` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map each error variant to (HTTP status, error code, message)
        let (status, code, message) = match self {
            AppError::Upstream(_) => (StatusCode::BAD_GATEWAY, "upstream_error", self.to_string()),
            AppError::BatchTimeout => (
                StatusCode::GATEWAY_TIMEOUT,
                "batch_timeout",
                self.to_string(),
            ),
            AppError::MissingBatchId => (
                StatusCode::BAD_GATEWAY,
                "missing_batch_id",
                self.to_string(),
            ),
            AppError::FixtureIo(_) | AppError::FixtureParse(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "An internal error occurred".to_string(),
            ),
        };

        // Build JSON response body
        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        // Return the response with status code and JSON body
        (status, body).into_response()
    }
}
