use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;

use crate::error::{PlannerError, Result};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

/// Settings for the HTTP service.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the six meal CSV files.
    pub data_dir: PathBuf,
    /// Load the datasets once at startup instead of on every request.
    pub preload: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_dir: PathBuf::from("."),
            preload: false,
        }
    }
}

impl ServerConfig {
    /// Resolve `host:port` to the address to bind.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|e| PlannerError::invalid_input(format!("invalid host {:?}: {}", self.host, e)))?
            .next()
            .ok_or_else(|| {
                PlannerError::invalid_input(format!("host {:?} resolved to no address", self.host))
            })
    }
}
