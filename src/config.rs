use std::net::{AddrParseError, SocketAddr};

use clap::Parser;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOG_FILTER: &str = "hello_world_rs=debug,tower_http=debug";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid bind address - host: {host}, port: {port}")]
    InvalidAddress {
        host: String,
        port: u16,
        #[source]
        source: AddrParseError,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Hello world service answering on /hello-world
#[derive(Parser, Debug, Clone)]
#[command(name = "hello-world-rs", version, about)]
pub struct Config {
    /// Host or IP address to bind to
    #[arg(short = 'H', long, env = "HELLO_WORLD_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(short, long, env = "HELLO_WORLD_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log filter, e.g. "hello_world_rs=debug,tower_http=info"
    #[arg(short, long, env = "RUST_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_level: String,
}

impl Config {
    pub fn bind_addr(&self) -> ConfigResult<SocketAddr> {
        // IPv6 literals need brackets to parse as a socket address.
        let addr = if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        };

        addr.parse().map_err(|source| ConfigError::InvalidAddress {
            host: self.host.clone(),
            port: self.port,
            source,
        })
    }
}
