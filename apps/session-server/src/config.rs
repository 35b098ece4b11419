//! Command-line and environment configuration

use std::net::SocketAddr;

use clap::Parser;

/// Default listen address (loopback; TLS terminates in front of us)
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:7771";

/// Default tracing directive when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "session_server=debug,crypto_session=info,tower_http=debug";

#[derive(Debug, Parser)]
#[command(name = "session-server", about = "Ephemeral buddy encryption service")]
pub struct Config {
    /// Address to bind the HTTP listener to
    #[arg(long, env = "SESSION_SERVER_LISTEN_ADDR", default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Tracing filter directive
    #[arg(long, env = "RUST_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
}
