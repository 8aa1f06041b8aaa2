//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use crate::outbound::persistence::DbPool;
use crate::server::Environment;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) environment: Environment,
    pub(crate) allowed_origin: String,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration using application preferences.
    #[must_use]
    pub fn new(
        bind_addr: SocketAddr,
        environment: Environment,
        allowed_origin: impl Into<String>,
    ) -> Self {
        Self {
            bind_addr,
            environment,
            allowed_origin: allowed_origin.into(),
            db_pool: None,
        }
    }

    /// Attach a database connection pool for the persistence adapter.
    ///
    /// Without a pool the server falls back to the in-memory repository,
    /// which integration tests rely on.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Return the configured runtime environment.
    #[must_use]
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Return the single origin the CORS policy will allow.
    #[must_use]
    pub fn allowed_origin(&self) -> &str {
        &self.allowed_origin
    }
}
