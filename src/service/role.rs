//! Role grant service.
//!
//! Grants are plain inserts: granting the same role twice stores two rows, and
//! removing a role removes every matching row. Temporary grants are kept until removed
//! or swept by [`RoleService::sweep_expired`], which only the role expiry scheduler calls.

use chrono::{DateTime, Utc};

use crate::{
    data::role::UserRoleRepository,
    error::AppError,
    model::role::{AddRoleParam, RoleGrant},
    store::Store,
    util::validate::require_id,
};

/// Service providing the role grant registry.
pub struct RoleService<'a> {
    store: &'a Store,
}

impl<'a> RoleService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Grants a role to a member.
    ///
    /// # Arguments
    /// - `param` - Member, role and optional name, temporary flag and expiry
    ///
    /// # Returns
    /// - `Ok(Some(RoleGrant))` - The stored grant
    /// - `Ok(None)` - Store unavailable or the insert failed
    /// - `Err(AppError::InvalidInput)` - An identifier is missing
    pub async fn add_role(&self, param: AddRoleParam) -> Result<Option<RoleGrant>, AppError> {
        let server_id = require_id("server_id", param.server_id)?;
        let user_id = require_id("user_id", param.user_id)?;
        let role_id = require_id("role_id", param.role_id)?;

        let Some(db) = self.store.connection_for("add role").await else {
            return Ok(None);
        };

        match UserRoleRepository::new(db).create(param).await {
            Ok(grant) => {
                tracing::debug!(server_id, user_id, role_id, "Granted role");
                Ok(Some(grant))
            }
            Err(e) => {
                tracing::error!(server_id, user_id, role_id, "[Database] Failed to add role: {}", e);
                Ok(None)
            }
        }
    }

    /// Removes every grant of `role_id` from a member.
    ///
    /// # Returns
    /// - `Ok(Some(u64))` - Number of grants removed
    /// - `Ok(None)` - Store unavailable or the delete failed
    /// - `Err(AppError::InvalidInput)` - An identifier is missing
    pub async fn remove_role(
        &self,
        server_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<Option<u64>, AppError> {
        require_id("server_id", server_id)?;
        require_id("user_id", user_id)?;
        require_id("role_id", role_id)?;

        let Some(db) = self.store.connection_for("remove role").await else {
            return Ok(None);
        };

        match UserRoleRepository::new(db).delete(server_id, user_id, role_id).await {
            Ok(removed) => Ok(Some(removed)),
            Err(e) => {
                tracing::error!(server_id, user_id, role_id, "[Database] Failed to remove role: {}", e);
                Ok(None)
            }
        }
    }

    /// Gets every grant held by a member.
    ///
    /// # Returns
    /// - `Ok(Vec<RoleGrant>)` - Grants, empty if the store is unavailable or failed
    /// - `Err(AppError::InvalidInput)` - An identifier is missing
    pub async fn list_roles(&self, server_id: u64, user_id: u64) -> Result<Vec<RoleGrant>, AppError> {
        require_id("server_id", server_id)?;
        require_id("user_id", user_id)?;

        let Some(db) = self.store.connection_for("list roles").await else {
            return Ok(Vec::new());
        };

        match UserRoleRepository::new(db).list(server_id, user_id).await {
            Ok(grants) => Ok(grants),
            Err(e) => {
                tracing::error!(server_id, user_id, "[Database] Failed to list roles: {}", e);
                Ok(Vec::new())
            }
        }
    }

    /// Removes temporary grants that expired at or before `now`, across all servers.
    ///
    /// # Returns
    /// - `Some(u64)` - Number of grants removed
    /// - `None` - Store unavailable or the delete failed
    pub async fn sweep_expired(&self, now: DateTime<Utc>) -> Option<u64> {
        let db = self.store.connection_for("sweep expired roles").await?;

        match UserRoleRepository::new(db).delete_expired(now).await {
            Ok(removed) => Some(removed),
            Err(e) => {
                tracing::error!("[Database] Failed to sweep expired roles: {}", e);
                None
            }
        }
    }
}
