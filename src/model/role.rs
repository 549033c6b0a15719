use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// A role granted to a member, optionally until an expiry time.
///
/// Expiry is data only: a temporary grant stays in place until it is removed
/// explicitly or swept by the role expiry scheduler.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleGrant {
    pub id: i32,
    pub server_id: u64,
    pub user_id: u64,
    pub role_id: u64,
    pub role_name: Option<String>,
    pub is_temporary: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl RoleGrant {
    pub fn from_entity(entity: entity::user_role::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            server_id: parse_u64_from_string(entity.server_id)?,
            user_id: parse_u64_from_string(entity.user_id)?,
            role_id: parse_u64_from_string(entity.role_id)?,
            role_name: entity.role_name,
            is_temporary: entity.is_temporary,
            expires_at: entity.expires_at,
            created_at: entity.created_at,
        })
    }

    /// Whether the grant is temporary and its expiry is at or before `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.is_temporary && self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}

/// Parameters for granting a role.
#[derive(Debug, Clone)]
pub struct AddRoleParam {
    pub server_id: u64,
    pub user_id: u64,
    pub role_id: u64,
    pub role_name: Option<String>,
    pub is_temporary: bool,
    pub expires_at: Option<DateTime<Utc>>,
}

impl AddRoleParam {
    /// Parameters for a permanent grant without a display name.
    pub fn permanent(server_id: u64, user_id: u64, role_id: u64) -> Self {
        Self {
            server_id,
            user_id,
            role_id,
            role_name: None,
            is_temporary: false,
            expires_at: None,
        }
    }
}
