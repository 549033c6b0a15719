//! Dashboard account service.
//!
//! Unlike the per-feature services, registration surfaces store failures to the caller:
//! a sign-in that could not be recorded must not look like a successful one.

use crate::{
    data::user::UserRepository,
    error::AppError,
    model::user::{UpsertUserParam, User},
    store::Store,
    util::validate::require_text,
};

/// Service providing dashboard account registration and lookup.
pub struct UserService<'a> {
    store: &'a Store,
    /// Open id of the account promoted to admin on registration.
    owner_open_id: Option<&'a str>,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `store` - Reference to the process-wide store handle
    /// - `owner_open_id` - Configured owner account, if any
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(store: &'a Store, owner_open_id: Option<&'a str>) -> Self {
        Self {
            store,
            owner_open_id,
        }
    }

    /// Registers an account or applies a sign-in patch to an existing one.
    ///
    /// # Arguments
    /// - `param` - Sign-in patch; only provided fields overwrite stored values
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The created or updated account
    /// - `Ok(None)` - Store unavailable; nothing was recorded
    /// - `Err(AppError::InvalidInput)` - The open id is missing
    /// - `Err(AppError)` - The upsert failed (logged and re-thrown)
    pub async fn upsert_user(&self, param: UpsertUserParam) -> Result<Option<User>, AppError> {
        require_text("open_id", &param.open_id)?;

        let Some(db) = self.store.connection_for("upsert user").await else {
            return Ok(None);
        };

        let open_id = param.open_id.clone();
        match UserRepository::new(db).upsert(param, self.owner_open_id).await {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                tracing::error!(%open_id, "[Database] Failed to upsert user: {}", e);
                Err(e)
            }
        }
    }

    /// Gets an account by its open id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Account is registered
    /// - `Ok(None)` - Unknown account, store unavailable, or the read failed
    /// - `Err(AppError::InvalidInput)` - The open id is missing
    pub async fn get_user_by_open_id(&self, open_id: &str) -> Result<Option<User>, AppError> {
        require_text("open_id", open_id)?;

        let Some(db) = self.store.connection_for("get user").await else {
            return Ok(None);
        };

        match UserRepository::new(db).find_by_open_id(open_id).await {
            Ok(user) => Ok(user),
            Err(e) => {
                tracing::error!(open_id, "[Database] Failed to get user: {}", e);
                Ok(None)
            }
        }
    }
}
