//! Server settings loaded via OrthoConfig.
//!
//! Values come from `STOREFRONT_*` environment variables, matching CLI
//! flags, or a configuration file, in OrthoConfig's usual precedence.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 4000;
const DEFAULT_DATABASE_URL: &str = "storefront.sqlite";
const DEFAULT_POOL_SIZE: u32 = 4;

/// Configuration for the storefront server process.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "STOREFRONT")]
pub struct ServerSettings {
    /// Interface to listen on.
    pub host: Option<IpAddr>,
    /// TCP port to listen on.
    pub port: Option<u16>,
    /// Path of the SQLite database file.
    pub database_url: Option<String>,
    /// Maximum pooled connections.
    pub pool_size: Option<u32>,
}

impl ServerSettings {
    /// Socket address to bind, defaulting to `0.0.0.0:4000`.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(DEFAULT_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// SQLite database path, defaulting to `storefront.sqlite`.
    #[must_use]
    pub fn database_url(&self) -> &str {
        self.database_url.as_deref().unwrap_or(DEFAULT_DATABASE_URL)
    }

    /// Pool size, defaulting to 4.
    #[must_use]
    pub fn pool_size(&self) -> u32 {
        self.pool_size.unwrap_or(DEFAULT_POOL_SIZE)
    }
}
