//! Message audit log repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::{
    data::readable_rows,
    error::AppError,
    model::message_log::{CreateMessageLogParam, MessageLog},
};

/// Repository providing append and read operations for the `message_logs` table.
pub struct MessageLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a message audit record.
    pub async fn create(&self, param: CreateMessageLogParam) -> Result<MessageLog, AppError> {
        let entity = entity::message_log::ActiveModel {
            server_id: ActiveValue::Set(param.server_id.to_string()),
            message_id: ActiveValue::Set(param.message_id.to_string()),
            user_id: ActiveValue::Set(param.user_id.to_string()),
            channel_id: ActiveValue::Set(param.channel_id.to_string()),
            content: ActiveValue::Set(param.content),
            action: ActiveValue::Set(param.action),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        MessageLog::from_entity(entity)
    }

    /// Gets the most recent message audit records of a server, newest first.
    pub async fn list(&self, server_id: u64, limit: u64) -> Result<Vec<MessageLog>, AppError> {
        let entities = entity::prelude::MessageLog::find()
            .filter(entity::message_log::Column::ServerId.eq(server_id.to_string()))
            .order_by_desc(entity::message_log::Column::CreatedAt)
            .order_by_desc(entity::message_log::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(readable_rows(
            "message_logs",
            entities,
            |entity| entity.id,
            MessageLog::from_entity,
        ))
    }
}
