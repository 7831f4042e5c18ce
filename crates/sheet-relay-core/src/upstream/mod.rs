//! Outbound HTTP clients.

mod append;
mod sheets;

pub use append::{AppendClient, UpstreamReply};
pub use sheets::{encode_range, SheetsClient};

const USER_AGENT: &str = concat!("sheet-relay/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client shared by the read and write paths.
///
/// No request timeout is set; calls run until the transport gives up.
pub fn build_http_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder().user_agent(USER_AGENT).tcp_nodelay(true).build()
}
