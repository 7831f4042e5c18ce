//! The relay endpoint.
//!
//! One route answers every method:
//! - `GET` reads values (or sheet titles) from the Sheets REST API
//! - `POST` forwards a JSON payload to the append endpoint
//! - `OPTIONS` answers browser preflights
//! - anything else is rejected with 405

mod read;
mod write;

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{RawQuery, State};
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::{middleware, Json, Router};
use sheet_relay_types::ErrorBody;
pub use sheet_relay_types::RELAY_PATH;

use crate::config::RelayConfig;
use crate::error::RelayResult;
use crate::middleware::cors_middleware;
use crate::upstream::{build_http_client, AppendClient, SheetsClient};

pub use read::{parse_sheet_params, read_values};
pub use write::{forward_write, reply_into_response};

/// Value of the `Allow` header on 405 responses.
pub const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";

/// Shared relay state. Immutable after construction.
#[derive(Clone)]
pub struct RelayState {
    inner: Arc<RelayStateInner>,
}

struct RelayStateInner {
    config: RelayConfig,
    sheets: SheetsClient,
    append: AppendClient,
}

impl RelayState {
    pub fn new(config: RelayConfig) -> RelayResult<Self> {
        let http_client = build_http_client()?;
        Ok(Self::with_http_client(config, http_client))
    }

    /// Build state around an existing client (tests, custom TLS setups).
    pub fn with_http_client(config: RelayConfig, http_client: reqwest::Client) -> Self {
        let sheets = SheetsClient::new(http_client.clone(), config.sheets_api_base.clone());
        let append = AppendClient::new(http_client);

        Self { inner: Arc::new(RelayStateInner { config, sheets, append }) }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.inner.config
    }

    pub fn sheets(&self) -> &SheetsClient {
        &self.inner.sheets
    }

    pub fn append(&self) -> &AppendClient {
        &self.inner.append
    }
}

/// Router serving the relay at [`RELAY_PATH`] with CORS headers on every response.
pub fn relay_router(state: RelayState) -> Router {
    Router::new()
        .route(RELAY_PATH, any(handle_relay))
        .with_state(state)
        .layer(middleware::from_fn(cors_middleware))
}

/// Method dispatch for the relay route.
///
/// Every failure is turned into a JSON `{error}` response here, once.
pub async fn handle_relay(
    State(state): State<RelayState>,
    method: Method,
    RawQuery(query): RawQuery,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let result = match method {
        Method::GET => {
            let params = parse_sheet_params(query.as_deref());
            read_values(&state, params.into()).await.map(|values| Json(values).into_response())
        }
        Method::POST => match body {
            Ok(body) => forward_write(&state, &body).await.map(reply_into_response),
            Err(rejection) => Err(rejection.into()),
        },
        Method::OPTIONS => Ok(StatusCode::NO_CONTENT.into_response()),
        other => {
            tracing::debug!("rejecting {} on relay route", other);
            Ok(method_not_allowed())
        }
    };

    result.unwrap_or_else(IntoResponse::into_response)
}

fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, ALLOWED_METHODS)],
        Json(ErrorBody::new("Method Not Allowed")),
    )
        .into_response()
}
