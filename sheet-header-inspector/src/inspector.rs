use reqwest::Client;
use serde_json::{json, Map, Value};
use sheet_relay_types::{parse_body_or_raw, ParsedBody, RELAY_PATH};

/// Where header requests are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Through a running relay, e.g. `http://localhost:3000`.
    Relay { host: String },
    /// Straight to the append endpoint, which also answers reads.
    Direct { url: String },
}

impl Endpoint {
    pub fn url(&self) -> String {
        match self {
            Self::Relay { host } => format!("{}{}", host.trim_end_matches('/'), RELAY_PATH),
            Self::Direct { url } => url.clone(),
        }
    }
}

/// Fetches header rows one sheet at a time.
pub struct HeaderInspector {
    client: Client,
    endpoint: Endpoint,
    range: String,
}

impl HeaderInspector {
    pub fn new(client: Client, endpoint: Endpoint, range: impl Into<String>) -> Self {
        Self { client, endpoint, range: range.into() }
    }

    /// Header row for one sheet. Transport failures come back as `{"error": ..}`.
    pub async fn inspect(&self, sheet: &str) -> Value {
        match self.fetch(sheet).await {
            Ok(text) => extract_header(&text),
            Err(e) => {
                tracing::debug!("request for {} failed: {}", sheet, e);
                json!({ "error": e.to_string() })
            },
        }
    }

    /// Inspect every sheet in order; a failure is recorded and the walk goes on.
    pub async fn inspect_all<'a, I>(&self, sheets: I) -> Map<String, Value>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut report = Map::new();
        for sheet in sheets {
            println!("Fetching headers for {sheet}...");
            let header = self.inspect(sheet).await;
            report.insert(sheet.to_string(), header);
        }
        report
    }

    async fn fetch(&self, sheet: &str) -> Result<String, reqwest::Error> {
        self.client
            .get(self.endpoint.url())
            .query(&[("sheet", sheet), ("range", self.range.as_str())])
            .send()
            .await?
            .text()
            .await
    }
}

/// Pick the header row out of a read response.
///
/// Prefers `values[0]`, then the raw `values` field, then the body text.
pub fn extract_header(text: &str) -> Value {
    if let ParsedBody::Json(body) = parse_body_or_raw(text) {
        match body.get("values") {
            Some(Value::Array(rows)) if !rows.is_empty() => return rows[0].clone(),
            Some(Value::Null) | None => {},
            Some(values) => return values.clone(),
        }
    }
    Value::String(text.to_string())
}
