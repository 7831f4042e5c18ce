//! Dumps the header row of each known sheet.

#![allow(clippy::print_stdout, reason = "CLI tool outputs to stdout")]

use anyhow::{Context, Result};
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod inspector;
mod sheets;

use inspector::{Endpoint, HeaderInspector};
use sheets::KNOWN_SHEETS;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Go through the relay instead of calling the append endpoint directly
    #[arg(long, env = "REACT_APP_USE_PROXY", action = ArgAction::SetTrue, value_parser = BoolishValueParser::new())]
    use_proxy: bool,

    /// Base URL of the running relay
    #[arg(long, env = "REACT_APP_DEV_PROXY_HOST", default_value = "http://localhost:3000")]
    proxy_host: String,

    /// Append endpoint URL, used when not going through the relay
    #[arg(long, env = "REACT_APP_SHEET_APPEND_URL")]
    append_url: Option<String>,

    /// Range requested from each sheet
    #[arg(long, default_value = "1:1")]
    range: String,

    /// Sheet to inspect (repeatable); defaults to the built-in list
    #[arg(long = "sheet", value_name = "NAME")]
    sheets: Vec<String>,
}

impl Cli {
    fn endpoint(&self) -> Result<Endpoint> {
        if self.use_proxy {
            return Ok(Endpoint::Relay { host: self.proxy_host.clone() });
        }
        let url = self
            .append_url
            .clone()
            .filter(|u| !u.is_empty())
            .context("REACT_APP_SHEET_APPEND_URL (or --append-url) is required without --use-proxy")?;
        Ok(Endpoint::Direct { url })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    let cli = Cli::parse();
    let endpoint = cli.endpoint()?;
    info!("Inspecting headers via {}", endpoint.url());

    let client = reqwest::Client::builder().build().context("failed to build HTTP client")?;
    let inspector = HeaderInspector::new(client, endpoint, cli.range.clone());

    let report = if cli.sheets.is_empty() {
        inspector.inspect_all(KNOWN_SHEETS).await
    } else {
        inspector.inspect_all(cli.sheets.iter().map(String::as_str)).await
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
