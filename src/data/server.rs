//! Discord server registration repository.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::{
    error::AppError,
    model::server::{DiscordServer, DEFAULT_PREFIX},
};

/// Repository providing database operations for the `discord_servers` table.
pub struct DiscordServerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiscordServerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a registered server by its Discord ID.
    ///
    /// # Returns
    /// - `Ok(Some(DiscordServer))` - Server is registered
    /// - `Ok(None)` - Server is not registered
    /// - `Err(AppError)` - Database error or unparsable stored ID
    pub async fn find(&self, server_id: u64) -> Result<Option<DiscordServer>, AppError> {
        let entity = entity::prelude::DiscordServer::find()
            .filter(entity::discord_server::Column::ServerId.eq(server_id.to_string()))
            .one(self.db)
            .await?;

        entity.map(DiscordServer::from_entity).transpose()
    }

    /// Registers a server with the default command prefix.
    ///
    /// # Arguments
    /// - `server_id` - Discord server ID
    /// - `server_name` - Display name, if known
    ///
    /// # Returns
    /// - `Ok(DiscordServer)` - The registered server
    /// - `Err(AppError)` - Database error, including a unique violation if already registered
    pub async fn create(
        &self,
        server_id: u64,
        server_name: Option<String>,
    ) -> Result<DiscordServer, AppError> {
        let now = Utc::now();
        let entity = entity::discord_server::ActiveModel {
            server_id: ActiveValue::Set(server_id.to_string()),
            server_name: ActiveValue::Set(server_name),
            owner_id: ActiveValue::Set(None),
            bot_token: ActiveValue::Set(None),
            prefix: ActiveValue::Set(DEFAULT_PREFIX.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        DiscordServer::from_entity(entity)
    }
}
