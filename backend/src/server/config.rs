//! HTTP server configuration object.

use std::net::{SocketAddr, TcpListener};

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;

use crate::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) listener: Option<TcpListener>,
    pub(crate) db_pool: DbPool,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Serve the store behind `db_pool` on `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool) -> Self {
        Self {
            bind_addr,
            listener: None,
            db_pool,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Serve on an already bound listener instead of binding `bind_addr`.
    ///
    /// Tests bind `127.0.0.1:0` and read the ephemeral port back from the
    /// listener.
    #[must_use]
    pub fn with_listener(mut self, listener: TcpListener) -> Self {
        self.bind_addr = listener.local_addr().unwrap_or(self.bind_addr);
        self.listener = Some(listener);
        self
    }

    /// Return the socket address the server will serve on.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }

    #[cfg(feature = "metrics")]
    /// Return the configured Prometheus middleware, if any.
    #[must_use]
    pub fn metrics(&self) -> Option<&PrometheusMetrics> {
        self.prometheus.as_ref()
    }
}
