use anyhow::{Context, Result};
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

pub async fn create_listener(bind: &str, port: u16) -> Result<TcpListener> {
    let addr = parse_bind_addr(bind, port)?;
    TcpListener::bind(addr).await.with_context(|| format!("failed to bind {addr}"))
}

fn parse_bind_addr(bind: &str, port: u16) -> Result<SocketAddr> {
    let ip: IpAddr = bind
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address '{}': {}", bind, e))?;
    Ok(SocketAddr::new(ip, port))
}

#[allow(
    clippy::expect_used,
    reason = "a server that cannot observe shutdown signals should not start"
)]
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, draining relay requests"),
        () = terminate => info!("Received SIGTERM, draining relay requests"),
    }
}
