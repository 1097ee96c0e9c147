//! Server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::config::{Config, FilterConfig, NamesConfig};
use crate::error::{GuardError, Result};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address
    pub addr: SocketAddr,
    /// Maximum request body size (bytes)
    pub max_body_size: usize,
    /// Enable request logging
    pub logging: bool,
    /// CORS enabled
    pub cors_enabled: bool,
    /// Replacement and wrap markup defaults
    pub filter: FilterConfig,
    /// Reserved-name extension list
    pub names: NamesConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 3000)),
            max_body_size: 1024 * 1024, // 1MB
            logging: true,
            cors_enabled: true,
            filter: FilterConfig::default(),
            names: NamesConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Build from the file/env configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let addr: SocketAddr = config
            .server
            .listen_addr()
            .parse()
            .map_err(|e| GuardError::Config(format!("Invalid listen address: {e}")))?;

        Ok(Self {
            addr,
            max_body_size: config.server.max_body_size,
            logging: config.server.request_logging,
            cors_enabled: config.server.cors,
            filter: config.filter.clone(),
            names: config.names.clone(),
        })
    }

    /// Create with custom port
    pub fn with_port(mut self, port: u16) -> Self {
        self.addr.set_port(port);
        self
    }

    /// Bind to all interfaces
    pub fn bind_all(mut self) -> Self {
        self.addr.set_ip(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        self
    }

    /// Set address directly
    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    /// Disable logging
    pub fn without_logging(mut self) -> Self {
        self.logging = false;
        self
    }

    /// Disable CORS
    pub fn without_cors(mut self) -> Self {
        self.cors_enabled = false;
        self
    }
}
