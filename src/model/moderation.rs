//! Moderation domain models: the action ledger and per-member warning counters.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    error::AppError,
    util::parse::{narrow_to_u32, parse_optional_u64, parse_u64_from_string},
};

/// An immutable record of one moderation action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModerationLog {
    pub id: i32,
    pub server_id: u64,
    pub user_id: u64,
    /// Action tag: ban, kick, mute, warn, etc.
    pub action: String,
    pub reason: Option<String>,
    pub moderator_id: Option<u64>,
    /// Duration in seconds; `None` means permanent.
    pub duration: Option<u32>,
    pub created_at: DateTime<Utc>,
}

impl ModerationLog {
    /// Converts an entity model to a moderation log domain model.
    ///
    /// # Returns
    /// - `Ok(ModerationLog)` - The converted log entry
    /// - `Err(AppError::InternalErr)` - Stored ID is not a u64 or duration is out of range
    pub fn from_entity(entity: entity::moderation_log::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            server_id: parse_u64_from_string(entity.server_id)?,
            user_id: parse_u64_from_string(entity.user_id)?,
            action: entity.action,
            reason: entity.reason,
            moderator_id: parse_optional_u64(entity.moderator_id)?,
            duration: entity
                .duration
                .map(|d| narrow_to_u32("duration", d))
                .transpose()?,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for appending a moderation action to the ledger.
#[derive(Debug, Clone)]
pub struct CreateModerationLogParam {
    pub server_id: u64,
    pub user_id: u64,
    pub action: String,
    pub reason: Option<String>,
    pub moderator_id: Option<u64>,
    /// Duration in seconds; `None` means permanent.
    pub duration: Option<u32>,
}

/// Warning counter of one member in one server.
///
/// A member without a row has zero warnings; a row is first created with a count of 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserWarning {
    pub server_id: u64,
    pub user_id: u64,
    pub warn_count: u32,
    pub updated_at: DateTime<Utc>,
}

impl UserWarning {
    pub fn from_entity(entity: entity::user_warning::Model) -> Result<Self, AppError> {
        Ok(Self {
            server_id: parse_u64_from_string(entity.server_id)?,
            user_id: parse_u64_from_string(entity.user_id)?,
            warn_count: narrow_to_u32("warn_count", entity.warn_count.into())?,
            updated_at: entity.updated_at,
        })
    }
}
