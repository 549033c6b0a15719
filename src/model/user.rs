//! Dashboard account models.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{internal::InternalError, AppError};

/// Permission level of a dashboard account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    #[default]
    User,
    Admin,
}

impl AccountRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountRole {
    type Err = InternalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            other => Err(InternalError::UnknownAccountRole(other.to_string())),
        }
    }
}

/// A registered dashboard account, keyed by its identity provider open id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: i32,
    pub open_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub login_method: Option<String>,
    pub role: AccountRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_signed_in: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user
    /// - `Err(AppError::InternalErr(UnknownAccountRole))` - Stored role is not recognized
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            open_id: entity.open_id,
            name: entity.name,
            email: entity.email,
            login_method: entity.login_method,
            role: entity.role.parse()?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            last_signed_in: entity.last_signed_in,
        })
    }
}

/// Patch applied when an account signs in or is registered.
///
/// Every field other than `open_id` is optional. Nullable text fields are doubly
/// wrapped: `None` leaves the stored value unchanged, `Some(None)` clears it and
/// `Some(Some(v))` stores `v`.
#[derive(Debug, Clone, Default)]
pub struct UpsertUserParam {
    pub open_id: String,
    pub name: Option<Option<String>>,
    pub email: Option<Option<String>>,
    pub login_method: Option<Option<String>>,
    pub role: Option<AccountRole>,
    pub last_signed_in: Option<DateTime<Utc>>,
}

impl UpsertUserParam {
    /// Creates an empty patch for `open_id`, which only refreshes the sign-in time.
    pub fn new(open_id: impl Into<String>) -> Self {
        Self {
            open_id: open_id.into(),
            ..Default::default()
        }
    }

    /// Role to write for this patch.
    ///
    /// An explicit role always wins. Without one, the configured owner account is
    /// promoted to admin and every other account keeps its stored role.
    pub fn resolved_role(&self, owner_open_id: Option<&str>) -> Option<AccountRole> {
        self.role.or_else(|| {
            (owner_open_id == Some(self.open_id.as_str())).then_some(AccountRole::Admin)
        })
    }
}
