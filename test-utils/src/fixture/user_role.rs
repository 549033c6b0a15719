//! Fixture for role grant test data.

use chrono::{DateTime, Utc};
use entity::user_role;

/// Default test server Discord ID.
pub const DEFAULT_SERVER_ID: &str = "100000000000000001";

/// Default test user Discord ID.
pub const DEFAULT_USER_ID: &str = "200000000000000001";

/// Default test role Discord ID.
pub const DEFAULT_ROLE_ID: &str = "400000000000000001";

/// Creates a permanent role grant entity model with default values.
pub fn entity() -> user_role::Model {
    entity_builder().build()
}

/// Creates a customizable role grant entity builder.
///
/// # Example
/// ```rust,ignore
/// let grant = fixture::user_role::entity_builder()
///     .temporary_until(Utc::now() + Duration::hours(1))
///     .build();
/// ```
pub fn entity_builder() -> UserRoleEntityBuilder {
    UserRoleEntityBuilder::default()
}

/// Builder for role grant entity models.
pub struct UserRoleEntityBuilder {
    id: i32,
    server_id: String,
    user_id: String,
    role_id: String,
    role_name: Option<String>,
    is_temporary: bool,
    expires_at: Option<DateTime<Utc>>,
}

impl Default for UserRoleEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            server_id: DEFAULT_SERVER_ID.to_string(),
            user_id: DEFAULT_USER_ID.to_string(),
            role_id: DEFAULT_ROLE_ID.to_string(),
            role_name: Some("Member".to_string()),
            is_temporary: false,
            expires_at: None,
        }
    }
}

impl UserRoleEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn server_id(mut self, server_id: impl Into<String>) -> Self {
        self.server_id = server_id.into();
        self
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn role_id(mut self, role_id: impl Into<String>) -> Self {
        self.role_id = role_id.into();
        self
    }

    pub fn role_name(mut self, role_name: Option<String>) -> Self {
        self.role_name = role_name;
        self
    }

    /// Marks the grant as temporary, expiring at the given time.
    pub fn temporary_until(mut self, expires_at: DateTime<Utc>) -> Self {
        self.is_temporary = true;
        self.expires_at = Some(expires_at);
        self
    }

    /// Builds the entity model.
    pub fn build(self) -> user_role::Model {
        user_role::Model {
            id: self.id,
            server_id: self.server_id,
            user_id: self.user_id,
            role_id: self.role_id,
            role_name: self.role_name,
            is_temporary: self.is_temporary,
            expires_at: self.expires_at,
            created_at: Utc::now(),
        }
    }
}
