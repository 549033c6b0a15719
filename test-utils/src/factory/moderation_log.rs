//! Moderation log factory.

use chrono::{DateTime, Utc};
use entity::moderation_log;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for moderation log rows, allowing the creation time to be pinned.
pub struct ModerationLogFactory<'a> {
    db: &'a DatabaseConnection,
    server_id: String,
    user_id: String,
    action: String,
    reason: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> ModerationLogFactory<'a> {
    /// Creates a factory for a `warn` entry created now.
    pub fn new(
        db: &'a DatabaseConnection,
        server_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            db,
            server_id: server_id.into(),
            user_id: user_id.into(),
            action: "warn".to_string(),
            reason: None,
            created_at: Utc::now(),
        }
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the moderation log row.
    pub async fn build(self) -> Result<moderation_log::Model, DbErr> {
        moderation_log::ActiveModel {
            server_id: ActiveValue::Set(self.server_id),
            user_id: ActiveValue::Set(self.user_id),
            action: ActiveValue::Set(self.action),
            reason: ActiveValue::Set(self.reason),
            moderator_id: ActiveValue::Set(None),
            duration: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a moderation log entry with the given action, created now.
pub async fn create_moderation_log(
    db: &DatabaseConnection,
    server_id: impl Into<String>,
    user_id: impl Into<String>,
    action: impl Into<String>,
) -> Result<moderation_log::Model, DbErr> {
    ModerationLogFactory::new(db, server_id, user_id)
        .action(action)
        .build()
        .await
}
