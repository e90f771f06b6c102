//! HTTP server configuration object.

use std::net::SocketAddr;

/// Runtime settings for the catalog server, built once at startup and
/// passed down explicitly.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) database_url: String,
}

impl ServerConfig {
    /// Construct a configuration from explicit settings.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, database_url: impl Into<String>) -> Self {
        Self {
            bind_addr,
            database_url: database_url.into(),
        }
    }

    /// Socket address the server binds to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// SQLite database location.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}
