//! Feature setting factory.

use chrono::Utc;
use entity::feature_setting;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a feature setting row.
///
/// # Arguments
/// - `db` - Database connection
/// - `server_id` - Discord server ID
/// - `feature_name` - Name of the feature toggle
/// - `is_enabled` - Whether the feature is enabled
/// - `settings` - Optional opaque settings blob
///
/// # Returns
/// - `Ok(Model)` - The created feature setting row
/// - `Err(DbErr)` - Database error during insertion
pub async fn create_feature_setting(
    db: &DatabaseConnection,
    server_id: impl Into<String>,
    feature_name: impl Into<String>,
    is_enabled: bool,
    settings: Option<&str>,
) -> Result<feature_setting::Model, DbErr> {
    let now = Utc::now();
    feature_setting::ActiveModel {
        server_id: ActiveValue::Set(server_id.into()),
        feature_name: ActiveValue::Set(feature_name.into()),
        is_enabled: ActiveValue::Set(is_enabled),
        settings: ActiveValue::Set(settings.map(str::to_string)),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
