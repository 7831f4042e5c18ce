use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;
use sheet_relay_types::{AppendPayload, ParsedBody};

use super::RelayState;
use crate::error::{RelayError, RelayResult};
use crate::upstream::UpstreamReply;

/// Forward an inbound write to the append endpoint, adding the server token.
///
/// An empty body is treated as `{}`. A body that is not valid JSON fails.
pub async fn forward_write(state: &RelayState, body: &[u8]) -> RelayResult<UpstreamReply> {
    let config = state.config();
    if !config.has_append_url() {
        return Err(RelayError::MissingAppendUrl);
    }

    let inbound: Option<Value> = if body.iter().all(u8::is_ascii_whitespace) {
        None
    } else {
        Some(serde_json::from_slice(body)?)
    };

    let payload = AppendPayload::from_body(inbound.as_ref())
        .with_default_token(config.append_token.as_deref());

    state.append().forward(&config.append_url, &payload).await
}

/// Relay the append endpoint's status and body unchanged.
pub fn reply_into_response(reply: UpstreamReply) -> Response {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);

    match reply.body {
        ParsedBody::Json(value) => (status, Json(value)).into_response(),
        ParsedBody::Raw(text) => {
            (status, [(header::CONTENT_TYPE, "text/plain; charset=utf-8")], text).into_response()
        }
    }
}
