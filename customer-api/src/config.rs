//! Server configuration
//!
//! Bind address and data file location. Values normally come from the
//! command line or the environment (see `main.rs`).

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{ApiError, ApiResult};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATA_FILE: &str = "customers.json";

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// File the collection is loaded from and saved to
    pub data_file: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl ServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Resolve the listen address. `host` may be an IP literal or a name
    /// such as `localhost`; the first resolved address is used.
    pub async fn socket_addr(&self) -> ApiResult<SocketAddr> {
        let mut addresses = tokio::net::lookup_host((self.host.as_str(), self.port))
            .await
            .map_err(|e| {
                ApiError::config(format!("Cannot resolve listen address {}:{}: {}", self.host, self.port, e))
            })?;

        addresses.next().ok_or_else(|| {
            ApiError::config(format!("No address found for {}:{}", self.host, self.port))
        })
    }
}
