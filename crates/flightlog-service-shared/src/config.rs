//! Environment-driven service configuration.
//!
//! - `SERVICE_PORT`: HTTP port (default: 8080)
//! - `FLIGHTLOG_AIRPORTS_PATH`: local airport reference file
//! - `FLIGHTLOG_AIRPORTS_URL`: URL serving the airport reference file
//! - `FLIGHTLOG_HTTP_TIMEOUT_SECS`: fetch timeout for the URL source (default: 10)

use std::net::SocketAddr;

use flightlog_lib::SourceOptions;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 8080;

/// Settings needed to start a service.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub port: u16,
    pub sources: SourceOptions,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            sources: SourceOptions::default(),
        }
    }
}

impl ServiceConfig {
    /// Create configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            port: parse_port(std::env::var("SERVICE_PORT").ok().as_deref()),
            sources: SourceOptions::from_env(),
        }
    }

    /// Address to bind on all interfaces.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn parse_port(value: Option<&str>) -> u16 {
    value
        .and_then(|p| p.trim().parse().ok())
        .unwrap_or(DEFAULT_PORT)
}
