//! Message audit log service.

use crate::{
    data::message_log::MessageLogRepository,
    error::AppError,
    model::message_log::{CreateMessageLogParam, MessageLog},
    store::Store,
    util::validate::{require_id, require_text},
};

/// Number of records returned by [`MessageLogService::list_message_logs`] by default.
pub const DEFAULT_MESSAGE_LOG_LIMIT: u64 = 100;

/// Service providing the edited and deleted message audit log.
pub struct MessageLogService<'a> {
    store: &'a Store,
}

impl<'a> MessageLogService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Appends a message audit record.
    ///
    /// # Returns
    /// - `Ok(Some(MessageLog))` - The appended record
    /// - `Ok(None)` - Store unavailable or the insert failed
    /// - `Err(AppError::InvalidInput)` - An identifier or the action is missing
    pub async fn log_message(
        &self,
        param: CreateMessageLogParam,
    ) -> Result<Option<MessageLog>, AppError> {
        let server_id = require_id("server_id", param.server_id)?;
        let message_id = require_id("message_id", param.message_id)?;
        require_id("user_id", param.user_id)?;
        require_id("channel_id", param.channel_id)?;
        require_text("action", &param.action)?;

        let Some(db) = self.store.connection_for("log message").await else {
            return Ok(None);
        };

        match MessageLogRepository::new(db).create(param).await {
            Ok(log) => Ok(Some(log)),
            Err(e) => {
                tracing::error!(server_id, message_id, "[Database] Failed to log message: {}", e);
                Ok(None)
            }
        }
    }

    /// Gets a server's most recent message audit records, newest first.
    ///
    /// # Arguments
    /// - `server_id` - Discord server ID (required)
    /// - `limit` - Maximum records returned, [`DEFAULT_MESSAGE_LOG_LIMIT`] if `None`
    ///
    /// # Returns
    /// - `Ok(Vec<MessageLog>)` - Records, empty if the store is unavailable or failed
    /// - `Err(AppError::InvalidInput)` - The server ID is missing
    pub async fn list_message_logs(
        &self,
        server_id: u64,
        limit: Option<u64>,
    ) -> Result<Vec<MessageLog>, AppError> {
        require_id("server_id", server_id)?;

        let Some(db) = self.store.connection_for("list message logs").await else {
            return Ok(Vec::new());
        };

        let limit = limit.unwrap_or(DEFAULT_MESSAGE_LOG_LIMIT);
        match MessageLogRepository::new(db).list(server_id, limit).await {
            Ok(logs) => Ok(logs),
            Err(e) => {
                tracing::error!(server_id, "[Database] Failed to list message logs: {}", e);
                Ok(Vec::new())
            }
        }
    }
}
