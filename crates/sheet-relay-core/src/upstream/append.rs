//! Forwarding writes to the append endpoint.

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use sheet_relay_types::{parse_body_or_raw, AppendPayload, ParsedBody};

use crate::error::RelayResult;

/// Status and decoded body of an append endpoint response.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: ParsedBody,
}

#[derive(Debug, Clone)]
pub struct AppendClient {
    http_client: Client,
}

impl AppendClient {
    pub fn new(http_client: Client) -> Self {
        Self { http_client }
    }

    /// POST `payload` as JSON to `url` and hand back whatever came back.
    ///
    /// Non-success statuses are not errors here; the caller relays them.
    pub async fn forward(&self, url: &str, payload: &AppendPayload) -> RelayResult<UpstreamReply> {
        let body = serde_json::to_vec(payload)?;
        let resp = self
            .http_client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let text = resp.text().await?;

        if status >= 400 {
            tracing::warn!("Append endpoint returned {}", status);
        } else {
            tracing::debug!("Append endpoint returned {}", status);
        }

        Ok(UpstreamReply { status, body: parse_body_or_raw(&text) })
    }
}
