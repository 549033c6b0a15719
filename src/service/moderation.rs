//! Moderation service for the action ledger and warning counters.

use sea_orm::DatabaseConnection;

use crate::{
    data::{moderation_log::ModerationLogRepository, warning::UserWarningRepository},
    error::AppError,
    model::moderation::{CreateModerationLogParam, ModerationLog, UserWarning},
    store::Store,
    util::{
        key_lock::LockKey,
        validate::{require_id, require_text},
    },
};

/// Number of entries returned by [`ModerationService::list_moderation_logs`] by default.
pub const DEFAULT_MODERATION_LOG_LIMIT: u64 = 50;

/// Service providing the moderation ledger.
pub struct ModerationService<'a> {
    store: &'a Store,
}

impl<'a> ModerationService<'a> {
    /// Creates a new ModerationService instance.
    ///
    /// # Arguments
    /// - `store` - Reference to the process-wide store handle
    ///
    /// # Returns
    /// - `ModerationService` - New service instance
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Appends a moderation action to the ledger.
    ///
    /// # Arguments
    /// - `param` - Target member, action tag and optional reason, moderator and duration
    ///
    /// # Returns
    /// - `Ok(Some(ModerationLog))` - The appended entry
    /// - `Ok(None)` - Store unavailable or the insert failed
    /// - `Err(AppError::InvalidInput)` - An identifier or the action is missing
    pub async fn log_moderation_action(
        &self,
        param: CreateModerationLogParam,
    ) -> Result<Option<ModerationLog>, AppError> {
        let server_id = require_id("server_id", param.server_id)?;
        let user_id = require_id("user_id", param.user_id)?;
        require_text("action", &param.action)?;

        let Some(db) = self.store.connection_for("log moderation action").await else {
            return Ok(None);
        };

        match ModerationLogRepository::new(db).create(param).await {
            Ok(log) => {
                tracing::debug!(server_id, user_id, action = %log.action, "Logged moderation action");
                Ok(Some(log))
            }
            Err(e) => {
                tracing::error!(server_id, user_id, "[Database] Failed to log moderation action: {}", e);
                Ok(None)
            }
        }
    }

    /// Gets a server's most recent moderation actions, newest first.
    ///
    /// # Arguments
    /// - `server_id` - Discord server ID (required)
    /// - `limit` - Maximum entries returned, [`DEFAULT_MODERATION_LOG_LIMIT`] if `None`
    ///
    /// # Returns
    /// - `Ok(Vec<ModerationLog>)` - Entries, empty if the store is unavailable or failed
    /// - `Err(AppError::InvalidInput)` - The server ID is missing
    pub async fn list_moderation_logs(
        &self,
        server_id: u64,
        limit: Option<u64>,
    ) -> Result<Vec<ModerationLog>, AppError> {
        require_id("server_id", server_id)?;

        let Some(db) = self.store.connection_for("list moderation logs").await else {
            return Ok(Vec::new());
        };

        let limit = limit.unwrap_or(DEFAULT_MODERATION_LOG_LIMIT);
        match ModerationLogRepository::new(db).list(server_id, limit).await {
            Ok(logs) => Ok(logs),
            Err(e) => {
                tracing::error!(server_id, "[Database] Failed to list moderation logs: {}", e);
                Ok(Vec::new())
            }
        }
    }

    /// Increments a member's warning count, creating the counter at 1 on first warning.
    ///
    /// # Arguments
    /// - `server_id` - Discord server ID (required)
    /// - `user_id` - Discord user ID (required)
    ///
    /// # Returns
    /// - `Ok(Some(u32))` - The new warning count
    /// - `Ok(None)` - Store unavailable or a store operation failed
    /// - `Err(AppError::InvalidInput)` - An identifier is missing
    pub async fn increment_warning(
        &self,
        server_id: u64,
        user_id: u64,
    ) -> Result<Option<u32>, AppError> {
        require_id("server_id", server_id)?;
        require_id("user_id", user_id)?;

        let Some(db) = self.store.connection_for("increment warning").await else {
            return Ok(None);
        };

        let _guard = self
            .store
            .locks()
            .lock(LockKey::Warning { server_id, user_id })
            .await;

        match apply_warning(db, server_id, user_id).await {
            Ok(count) => Ok(Some(count)),
            Err(e) => {
                tracing::error!(server_id, user_id, "[Database] Failed to increment warning: {}", e);
                Ok(None)
            }
        }
    }

    /// Gets a member's warning counter without creating one.
    ///
    /// A member with no counter has zero warnings.
    ///
    /// # Returns
    /// - `Ok(Some(UserWarning))` - Member has been warned
    /// - `Ok(None)` - Never warned, store unavailable, or the read failed
    /// - `Err(AppError::InvalidInput)` - An identifier is missing
    pub async fn get_user_warnings(
        &self,
        server_id: u64,
        user_id: u64,
    ) -> Result<Option<UserWarning>, AppError> {
        require_id("server_id", server_id)?;
        require_id("user_id", user_id)?;

        let Some(db) = self.store.connection_for("get user warnings").await else {
            return Ok(None);
        };

        match UserWarningRepository::new(db).find(server_id, user_id).await {
            Ok(warning) => Ok(warning),
            Err(e) => {
                tracing::error!(server_id, user_id, "[Database] Failed to get user warnings: {}", e);
                Ok(None)
            }
        }
    }
}

async fn apply_warning(db: &DatabaseConnection, server_id: u64, user_id: u64) -> Result<u32, AppError> {
    let repo = UserWarningRepository::new(db);

    let count = match repo.find(server_id, user_id).await? {
        Some(warning) => {
            let count = warning.warn_count.saturating_add(1);
            repo.set_count(server_id, user_id, count).await?;
            count
        }
        None => repo.create(server_id, user_id).await?.warn_count,
    };

    tracing::debug!(server_id, user_id, warn_count = count, "Incremented warning");

    Ok(count)
}
