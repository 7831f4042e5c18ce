use sheet_relay_types::{SheetParams, SheetQuery, ValuesResponse};

use super::RelayState;
use crate::error::{RelayError, RelayResult};

/// Parse the read parameters from a raw query string.
///
/// Unknown keys are ignored; when a key repeats, the first value wins.
pub fn parse_sheet_params(raw_query: Option<&str>) -> SheetParams {
    let mut params = SheetParams::default();
    let Some(raw) = raw_query else {
        return params;
    };

    for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
        let slot = match key.as_ref() {
            "sheet" => &mut params.sheet,
            "range" => &mut params.range,
            "names" => &mut params.names,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value.into_owned());
        }
    }
    params
}

/// Serve a read: sheet titles for name-only queries, cell values otherwise.
pub async fn read_values(state: &RelayState, query: SheetQuery) -> RelayResult<ValuesResponse> {
    let config = state.config();
    if !config.has_read_credentials() {
        return Err(RelayError::MissingReadCredentials);
    }

    if query.names_only {
        let titles = state.sheets().sheet_titles(&config.sheet_id, &config.api_key).await?;
        tracing::debug!("listed {} sheet titles", titles.len());
        return Ok(ValuesResponse::single_row(titles));
    }

    let range = query.a1_range().ok_or(RelayError::MissingSheet)?;
    state.sheets().values(&config.sheet_id, &config.api_key, &range).await
}
