//! Discord server registration service.

use sea_orm::DatabaseConnection;

use crate::{
    data::server::DiscordServerRepository,
    error::AppError,
    model::server::DiscordServer,
    store::Store,
    util::{key_lock::LockKey, validate::require_id},
};

/// Service providing get-or-create access to server registrations.
pub struct ServerService<'a> {
    store: &'a Store,
}

impl<'a> ServerService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Gets a server's registration, registering it with the default prefix if absent.
    ///
    /// An existing registration is returned as stored; `server_name` is only used when
    /// registering.
    ///
    /// # Returns
    /// - `Ok(Some(DiscordServer))` - The registration
    /// - `Ok(None)` - Store unavailable or a store operation failed
    /// - `Err(AppError::InvalidInput)` - The server ID is missing
    pub async fn get_or_create_server(
        &self,
        server_id: u64,
        server_name: Option<String>,
    ) -> Result<Option<DiscordServer>, AppError> {
        require_id("server_id", server_id)?;

        let Some(db) = self.store.connection_for("get server").await else {
            return Ok(None);
        };

        let _guard = self.store.locks().lock(LockKey::Server { server_id }).await;

        match find_or_register(db, server_id, server_name).await {
            Ok(server) => Ok(Some(server)),
            Err(e) => {
                tracing::error!(server_id, "[Database] Failed to get server: {}", e);
                Ok(None)
            }
        }
    }
}

async fn find_or_register(
    db: &DatabaseConnection,
    server_id: u64,
    server_name: Option<String>,
) -> Result<DiscordServer, AppError> {
    let repo = DiscordServerRepository::new(db);

    if let Some(server) = repo.find(server_id).await? {
        return Ok(server);
    }

    let server = repo.create(server_id, server_name).await?;
    tracing::info!(server_id, "Registered server");

    Ok(server)
}
