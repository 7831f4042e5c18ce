//! Unified error type for the relay.

use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sheet_relay_types::ErrorBody;
use thiserror::Error;

/// Fallback message when a failure carries no text of its own.
const GENERIC_MESSAGE: &str = "server error";

/// Broad classes of relay failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required setting is missing from the environment.
    Configuration,
    /// A required request parameter is missing.
    Validation,
    /// The outbound call or its response handling failed.
    Upstream,
}

/// Main error type for relay operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RelayError {
    /// Read credentials are not configured.
    #[error("Missing SHEET_ID or API_KEY")]
    MissingReadCredentials,

    /// Append endpoint is not configured.
    #[error("Target URL not configured")]
    MissingAppendUrl,

    /// Read request without a sheet name.
    #[error("Missing sheet")]
    MissingSheet,

    /// Inbound body could not be read, e.g. it exceeds the size limit.
    #[error("{message}")]
    RequestBody { status: StatusCode, message: String },

    /// Outbound HTTP call failed. The request URL is stripped on conversion.
    #[error("{}", error_chain(.0))]
    Network(reqwest::Error),

    /// JSON encoding or decoding failed.
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    /// Upstream answered with something the relay cannot use.
    #[error("{0}")]
    Upstream(String),
}

/// Result type alias for relay operations.
pub type RelayResult<T> = Result<T, RelayError>;

/// `err: source: source...`, since reqwest keeps the useful detail in sources.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        // The read URL carries the API key as a query parameter.
        RelayError::Network(err.without_url())
    }
}

impl From<BytesRejection> for RelayError {
    fn from(rejection: BytesRejection) -> Self {
        RelayError::RequestBody { status: rejection.status(), message: rejection.body_text() }
    }
}

impl RelayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingReadCredentials | Self::MissingAppendUrl => ErrorKind::Configuration,
            Self::MissingSheet | Self::RequestBody { .. } => ErrorKind::Validation,
            Self::Network(_) | Self::Json(_) | Self::Upstream(_) => ErrorKind::Upstream,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingReadCredentials | Self::MissingSheet => StatusCode::BAD_REQUEST,
            Self::RequestBody { status, .. } => *status,
            Self::MissingAppendUrl
            | Self::Network(_)
            | Self::Json(_)
            | Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field of the response body.
    pub fn public_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_MESSAGE.to_string()
        } else {
            message
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.public_message();

        if status.is_server_error() {
            tracing::error!(kind = ?self.kind(), "relay request failed: {}", message);
        } else {
            tracing::debug!(kind = ?self.kind(), "relay request rejected: {}", message);
        }

        (status, Json(ErrorBody::new(message))).into_response()
    }
}
