//! Warning counter factory.

use chrono::Utc;
use entity::user_warning;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a warning counter row with the given count.
///
/// # Arguments
/// - `db` - Database connection
/// - `server_id` - Discord server ID
/// - `user_id` - Discord user ID
/// - `warn_count` - Initial warning count
///
/// # Returns
/// - `Ok(Model)` - The created warning row
/// - `Err(DbErr)` - Database error during insertion
pub async fn create_warning(
    db: &DatabaseConnection,
    server_id: impl Into<String>,
    user_id: impl Into<String>,
    warn_count: i32,
) -> Result<user_warning::Model, DbErr> {
    let now = Utc::now();
    user_warning::ActiveModel {
        server_id: ActiveValue::Set(server_id.into()),
        user_id: ActiveValue::Set(user_id.into()),
        warn_count: ActiveValue::Set(warn_count),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
