use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "sheet-relay-server",
    about = "Sheet Relay - proxies spreadsheet reads and appends",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[arg(short, long, env = "SHEET_RELAY_PORT", default_value = "3000")]
    pub port: u16,

    #[arg(short, long, env = "SHEET_RELAY_BIND", default_value = "127.0.0.1")]
    pub bind: String,

    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}
