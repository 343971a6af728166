//! bb8-backed async connection pool for Diesel PostgreSQL.
//!
//! Trip persistence checks a connection out per repository call, so the
//! pool only exposes the two knobs that matter here: how many connections
//! to hold and how long a checkout may wait.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};

/// Failures raised by the connection pool.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// No connection could be checked out before the timeout.
    #[error("database connection unavailable: {message}")]
    Unavailable {
        /// Underlying bb8 diagnostic.
        message: String,
    },

    /// The pool itself could not be constructed.
    #[error("database pool setup failed: {message}")]
    Setup {
        /// Underlying bb8 diagnostic.
        message: String,
    },
}

impl PoolError {
    /// Build a [`PoolError::Unavailable`].
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Build a [`PoolError::Setup`].
    pub fn setup(message: impl Into<String>) -> Self {
        Self::Setup {
            message: message.into(),
        }
    }
}

/// Tuning for [`DbPool::connect`].
#[derive(Debug, Clone)]
pub struct PoolSettings {
    database_url: String,
    max_connections: u32,
    checkout_timeout: Duration,
}

impl PoolSettings {
    /// Settings for the given database URL: up to 10 connections, 30 second
    /// checkout timeout.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: 10,
            checkout_timeout: Duration::from_secs(30),
        }
    }

    /// Cap the number of pooled connections.
    pub fn max_connections(mut self, limit: u32) -> Self {
        self.max_connections = limit;
        self
    }

    /// Bound how long a checkout may wait for a free connection.
    pub fn checkout_timeout(mut self, timeout: Duration) -> Self {
        self.checkout_timeout = timeout;
        self
    }

    /// The configured database URL.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}

/// Async PostgreSQL connection pool for the Diesel repositories.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncPgConnection>,
}

impl DbPool {
    /// Build the pool and open its initial connections.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Setup`] when the pool cannot be constructed,
    /// for instance on a malformed URL or an unreachable server.
    pub async fn connect(settings: PoolSettings) -> Result<Self, PoolError> {
        let manager =
            AsyncDieselConnectionManager::<AsyncPgConnection>::new(&settings.database_url);

        let inner = Pool::builder()
            .max_size(settings.max_connections)
            .connection_timeout(settings.checkout_timeout)
            .build(manager)
            .await
            .map_err(|err| PoolError::setup(err.to_string()))?;

        Ok(Self { inner })
    }

    /// Check a connection out of the pool.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Unavailable`] when no connection frees up
    /// within the checkout timeout.
    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.inner
            .get()
            .await
            .map_err(|err| PoolError::unavailable(err.to_string()))
    }
}
