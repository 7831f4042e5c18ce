//! Write-path payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reserved payload key carrying the append endpoint's shared secret.
pub const TOKEN_FIELD: &str = "token";

/// Open JSON object forwarded to the append endpoint.
///
/// The relay only ever looks at [`TOKEN_FIELD`]; every other key belongs to
/// the caller and is forwarded untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct AppendPayload(Map<String, Value>);

impl AppendPayload {
    /// Copies the fields of an inbound body. A missing body, or one that is
    /// not a JSON object, yields an empty payload.
    pub fn from_body(body: Option<&Value>) -> Self {
        match body {
            Some(Value::Object(map)) => Self(map.clone()),
            _ => Self::default(),
        }
    }

    pub fn token(&self) -> Option<&Value> {
        self.0.get(TOKEN_FIELD)
    }

    fn has_token(&self) -> bool {
        match self.token() {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        }
    }

    /// Injects `token` unless the caller already supplied one.
    pub fn with_default_token(mut self, token: Option<&str>) -> Self {
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            if !self.has_token() {
                self.0.insert(TOKEN_FIELD.to_string(), Value::String(token.to_string()));
            }
        }
        self
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}
