//! Connection handle shared by every data layer component.
//!
//! A `Store` is created once at process startup and passed by reference into each
//! service. It owns the (possibly absent) database connection and the per-key lock map
//! that serializes read-modify-write sequences.
//!
//! The connection is resolved at most once. A store built from a URL connects lazily on
//! first use; if no URL is configured, or the connection cannot be established, the
//! store stays unavailable for the rest of the process and every component degrades to
//! empty reads and no-op writes.

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tokio::sync::OnceCell;

use crate::util::key_lock::KeyLocks;

/// Process-wide handle to the record store.
pub struct Store {
    /// Connection string used for lazy initialization, if configured.
    url: Option<String>,
    /// Resolved connection; `Some(None)` once resolution failed or no URL exists.
    connection: OnceCell<Option<DatabaseConnection>>,
    /// Per-key mutexes guarding read-modify-write sequences.
    locks: KeyLocks,
}

impl Store {
    /// Creates a store that connects to `url` on first use.
    ///
    /// # Arguments
    /// - `url` - Database connection string; `None` yields a permanently unavailable store
    pub fn lazy(url: Option<String>) -> Self {
        Self {
            url,
            connection: OnceCell::new(),
            locks: KeyLocks::new(),
        }
    }

    /// Creates a store around an already established connection.
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self {
            url: None,
            connection: OnceCell::from(Some(db)),
            locks: KeyLocks::new(),
        }
    }

    /// Creates a store with no backing connection.
    pub fn unavailable() -> Self {
        Self {
            url: None,
            connection: OnceCell::from(None),
            locks: KeyLocks::new(),
        }
    }

    /// Returns the database connection, resolving it on first call.
    ///
    /// Concurrent first callers wait on the same initialization; only one connection
    /// attempt is ever made.
    ///
    /// # Returns
    /// - `Some(&DatabaseConnection)` - Store is reachable
    /// - `None` - No connection is configured or connecting failed
    pub async fn connection(&self) -> Option<&DatabaseConnection> {
        self.connection
            .get_or_init(|| async {
                let url = self.url.as_deref()?;

                let mut opt = ConnectOptions::new(url);
                opt.sqlx_logging(false);

                match Database::connect(opt).await {
                    Ok(db) => {
                        tracing::info!("Connected to database");
                        Some(db)
                    }
                    Err(e) => {
                        tracing::warn!("[Database] Failed to connect: {}", e);
                        None
                    }
                }
            })
            .await
            .as_ref()
    }

    /// Returns the database connection for `operation`, logging when it is absent.
    ///
    /// Every service method goes through this so that store unavailability is always
    /// reported the same way.
    ///
    /// # Arguments
    /// - `operation` - Human readable operation name for the warning, e.g. `"add balance"`
    pub async fn connection_for(&self, operation: &str) -> Option<&DatabaseConnection> {
        let db = self.connection().await;
        if db.is_none() {
            tracing::warn!("[Database] Cannot {}: database not available", operation);
        }
        db
    }

    /// Per-key lock map shared by all services using this store.
    pub fn locks(&self) -> &KeyLocks {
        &self.locks
    }

    /// Closes the underlying connection pool, if one was established.
    pub async fn close(self) {
        if let Some(Some(db)) = self.connection.into_inner() {
            if let Err(e) = db.close().await {
                tracing::warn!("[Database] Failed to close connection: {}", e);
            }
        }
    }
}
