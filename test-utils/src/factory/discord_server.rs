//! Discord server registration factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::discord_server;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a registered Discord server with the default `!` prefix.
///
/// # Arguments
/// - `db` - Database connection
/// - `server_id` - Discord server ID as string
///
/// # Returns
/// - `Ok(Model)` - The created server row
/// - `Err(DbErr)` - Database error during insertion
pub async fn create_server(
    db: &DatabaseConnection,
    server_id: impl Into<String>,
) -> Result<discord_server::Model, DbErr> {
    let now = Utc::now();
    discord_server::ActiveModel {
        server_id: ActiveValue::Set(server_id.into()),
        server_name: ActiveValue::Set(Some(format!("Server {}", next_id()))),
        owner_id: ActiveValue::Set(None),
        bot_token: ActiveValue::Set(None),
        prefix: ActiveValue::Set("!".to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
