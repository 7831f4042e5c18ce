//! Best-effort body decoding and the shared error body.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An HTTP body that was either valid JSON or kept as raw text.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedBody {
    Json(Value),
    Raw(String),
}

/// Parses `text` as JSON, falling back to the text itself.
///
/// An empty body is not valid JSON and comes back as `Raw("")`.
pub fn parse_body_or_raw(text: &str) -> ParsedBody {
    match serde_json::from_str(text) {
        Ok(value) => ParsedBody::Json(value),
        Err(_) => ParsedBody::Raw(text.to_string()),
    }
}

/// Body of every relay failure response: `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self { error: message.into() }
    }
}
