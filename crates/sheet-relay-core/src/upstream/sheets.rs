//! Google Sheets REST API reads.

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use sheet_relay_types::{parse_body_or_raw, ParsedBody, ValuesResponse};

use crate::error::{RelayError, RelayResult};

/// Percent-encodes an A1 range for use as a single path segment.
pub fn encode_range(range: &str) -> String {
    urlencoding::encode(range).into_owned()
}

#[derive(Debug, Default, Deserialize)]
struct SpreadsheetMetadata {
    #[serde(default)]
    sheets: Option<Vec<SheetEntry>>,
}

#[derive(Debug, Default, Deserialize)]
struct SheetEntry {
    #[serde(default)]
    properties: Option<SheetProperties>,
}

#[derive(Debug, Default, Deserialize)]
struct SheetProperties {
    #[serde(default)]
    title: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Option<Vec<Vec<Value>>>,
}

/// Read-only client for the `spreadsheets` resource.
#[derive(Debug, Clone)]
pub struct SheetsClient {
    http_client: Client,
    base_url: String,
}

impl SheetsClient {
    pub fn new(http_client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http_client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn spreadsheet_url(&self, sheet_id: &str) -> String {
        format!("{}/spreadsheets/{}", self.base_url, urlencoding::encode(sheet_id))
    }

    /// Ordered titles of every sheet in the spreadsheet, skipping untitled ones.
    pub async fn sheet_titles(&self, sheet_id: &str, api_key: &str) -> RelayResult<Vec<String>> {
        let url = self.spreadsheet_url(sheet_id);
        let body = self.fetch_json(&url, api_key).await?;
        let metadata: SpreadsheetMetadata = serde_json::from_value(body)?;

        Ok(metadata
            .sheets
            .unwrap_or_default()
            .into_iter()
            .filter_map(|entry| entry.properties.and_then(|p| p.title))
            .filter(|title| !title.is_empty())
            .collect())
    }

    /// Cell values for an A1 range. Missing data yields an empty grid.
    pub async fn values(
        &self,
        sheet_id: &str,
        api_key: &str,
        a1_range: &str,
    ) -> RelayResult<ValuesResponse> {
        let url =
            format!("{}/values/{}", self.spreadsheet_url(sheet_id), encode_range(a1_range));
        tracing::debug!(range = %a1_range, "fetching sheet values");

        let body = self.fetch_json(&url, api_key).await?;
        let range: ValueRange = serde_json::from_value(body)?;

        Ok(ValuesResponse::from_cells(range.values.unwrap_or_default()))
    }

    /// GET `url?key=..` and decode the body as JSON.
    ///
    /// A non-success status is logged but otherwise not interpreted; callers
    /// see whatever JSON the API sent back.
    async fn fetch_json(&self, url: &str, api_key: &str) -> RelayResult<Value> {
        let resp = self.http_client.get(url).query(&[("key", api_key)]).send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            tracing::warn!("Sheets API returned {}: {}", status, truncate(&text, 200));
        }

        match parse_body_or_raw(&text) {
            ParsedBody::Json(value) => Ok(value),
            ParsedBody::Raw(_) => Err(RelayError::Upstream(format!(
                "Sheets API returned a non-JSON body (status {})",
                status.as_u16()
            ))),
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
