use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// Audit record of an edited or deleted message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageLog {
    pub id: i32,
    pub server_id: u64,
    pub message_id: u64,
    pub user_id: u64,
    pub channel_id: u64,
    /// Message content at the time of the event, when available.
    pub content: Option<String>,
    /// Action tag: deleted, edited, etc.
    pub action: String,
    pub created_at: DateTime<Utc>,
}

impl MessageLog {
    pub fn from_entity(entity: entity::message_log::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            server_id: parse_u64_from_string(entity.server_id)?,
            message_id: parse_u64_from_string(entity.message_id)?,
            user_id: parse_u64_from_string(entity.user_id)?,
            channel_id: parse_u64_from_string(entity.channel_id)?,
            content: entity.content,
            action: entity.action,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for appending a message audit record.
#[derive(Debug, Clone)]
pub struct CreateMessageLogParam {
    pub server_id: u64,
    pub message_id: u64,
    pub user_id: u64,
    pub channel_id: u64,
    pub content: Option<String>,
    pub action: String,
}
