//! Moderation log data repository.
//!
//! The moderation ledger is append-only: this repository only inserts and reads rows.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::{
    data::readable_rows,
    error::AppError,
    model::moderation::{CreateModerationLogParam, ModerationLog},
};

/// Repository providing append and read operations for the `moderation_logs` table.
pub struct ModerationLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ModerationLogRepository<'a> {
    /// Creates a new ModerationLogRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ModerationLogRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a moderation action to the ledger.
    ///
    /// # Arguments
    /// - `param` - The action, its target member and optional metadata
    ///
    /// # Returns
    /// - `Ok(ModerationLog)` - The appended entry
    /// - `Err(AppError)` - Database error during insert
    pub async fn create(&self, param: CreateModerationLogParam) -> Result<ModerationLog, AppError> {
        let entity = entity::moderation_log::ActiveModel {
            server_id: ActiveValue::Set(param.server_id.to_string()),
            user_id: ActiveValue::Set(param.user_id.to_string()),
            action: ActiveValue::Set(param.action),
            reason: ActiveValue::Set(param.reason),
            moderator_id: ActiveValue::Set(param.moderator_id.map(|id| id.to_string())),
            duration: ActiveValue::Set(param.duration.map(i64::from)),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        ModerationLog::from_entity(entity)
    }

    /// Gets the most recent moderation actions of a server, newest first.
    ///
    /// Entries created in the same instant are ordered by descending row ID.
    ///
    /// # Arguments
    /// - `server_id` - Discord server ID
    /// - `limit` - Maximum number of entries returned
    ///
    /// # Returns
    /// - `Ok(Vec<ModerationLog>)` - At most `limit` entries
    /// - `Err(AppError)` - Database error
    pub async fn list(&self, server_id: u64, limit: u64) -> Result<Vec<ModerationLog>, AppError> {
        let entities = entity::prelude::ModerationLog::find()
            .filter(entity::moderation_log::Column::ServerId.eq(server_id.to_string()))
            .order_by_desc(entity::moderation_log::Column::CreatedAt)
            .order_by_desc(entity::moderation_log::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(readable_rows(
            "moderation_logs",
            entities,
            |entity| entity.id,
            ModerationLog::from_entity,
        ))
    }
}
