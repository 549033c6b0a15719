//! Dashboard user factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::user;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating dashboard users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let admin = UserFactory::new(&db)
///     .open_id("owner")
///     .role("admin")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    open_id: String,
    name: Option<String>,
    email: Option<String>,
    role: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - open_id: `"open_{id}"` where id is auto-incremented
    /// - name: `"User {id}"`
    /// - email: `None`
    /// - role: `"user"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            open_id: format!("open_{}", id),
            name: Some(format!("User {}", id)),
            email: None,
            role: "user".to_string(),
        }
    }

    pub fn open_id(mut self, open_id: impl Into<String>) -> Self {
        self.open_id = open_id.into();
        self
    }

    pub fn name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    pub fn email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Builds and inserts the user entity into the database.
    pub async fn build(self) -> Result<user::Model, DbErr> {
        let now = Utc::now();
        user::ActiveModel {
            open_id: ActiveValue::Set(self.open_id),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            login_method: ActiveValue::Set(None),
            role: ActiveValue::Set(self.role),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            last_signed_in: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<user::Model, DbErr> {
    UserFactory::new(db).build().await
}
