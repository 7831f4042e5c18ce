//! Sheet Relay Server
//!
//! Hosts the relay on `/api/append`:
//! - `GET` reads values or sheet titles from the Google Sheets REST API
//! - `POST` forwards rows to the append endpoint with the server token added
//!
//! Access via: http://localhost:3000

use anyhow::{Context, Result};
use clap::Parser;
use sheet_relay_core::{RelayConfig, RelayState};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod cli;
mod router;
mod server_utils;
#[cfg(test)]
mod test_helpers;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = RelayConfig::from_env();
    if !config.has_read_credentials() {
        warn!("SHEET_ID or SHEETS_API_KEY not set; reads will answer 400");
    }
    if !config.has_append_url() {
        warn!("SHEET_APPEND_URL not set; writes will answer 500");
    }
    if config.append_token.is_none() {
        info!("No append token configured; writes are forwarded without one");
    }

    let state = RelayState::new(config).context("failed to build relay state")?;
    let app = router::build_router(state);

    let listener = server_utils::create_listener(&cli.bind, cli.port).await?;
    let addr = listener.local_addr()?;
    info!("Sheet Relay {} listening on http://{}", env!("CARGO_PKG_VERSION"), addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(server_utils::shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
