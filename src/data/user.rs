//! Dashboard user data repository.
//!
//! This module provides the `UserRepository` for registering dashboard accounts and
//! looking them up by open id. Registration is a single insert-on-conflict-update
//! statement that only overwrites the fields a sign-in patch provides.

use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::{
    error::AppError,
    model::user::{AccountRole, UpsertUserParam, User},
};

/// Repository providing database operations for dashboard accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a dashboard account from a sign-in patch.
    ///
    /// Inserts a new account, or on an `open_id` conflict updates only the columns the
    /// patch carries. A patch with no fields refreshes `last_signed_in` and nothing else.
    /// `updated_at` is refreshed on every update.
    ///
    /// # Arguments
    /// - `param` - Sign-in patch keyed by open id
    /// - `owner_open_id` - Configured owner account, promoted to admin when no role is given
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated account
    /// - `Err(AppError)` - Database error during upsert or invalid stored role
    pub async fn upsert(
        &self,
        param: UpsertUserParam,
        owner_open_id: Option<&str>,
    ) -> Result<User, AppError> {
        let (model, update_columns) = upsert_statement(param, owner_open_id, Utc::now());

        let entity = entity::prelude::User::insert(model)
            .on_conflict(
                OnConflict::column(entity::user::Column::OpenId)
                    .update_columns(update_columns)
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?;

        User::from_entity(entity)
    }

    /// Finds an account by its open id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Account is registered
    /// - `Ok(None)` - No account with that open id
    /// - `Err(AppError)` - Database error or invalid stored role
    pub async fn find_by_open_id(&self, open_id: &str) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::OpenId.eq(open_id))
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }
}

/// Builds the insert values and on-conflict update columns for a sign-in patch.
fn upsert_statement(
    param: UpsertUserParam,
    owner_open_id: Option<&str>,
    now: DateTime<Utc>,
) -> (entity::user::ActiveModel, Vec<entity::user::Column>) {
    let role = param.resolved_role(owner_open_id);

    // Build list of columns to update on conflict
    let mut update_columns = Vec::new();
    if param.name.is_some() {
        update_columns.push(entity::user::Column::Name);
    }
    if param.email.is_some() {
        update_columns.push(entity::user::Column::Email);
    }
    if param.login_method.is_some() {
        update_columns.push(entity::user::Column::LoginMethod);
    }
    if role.is_some() {
        update_columns.push(entity::user::Column::Role);
    }
    if param.last_signed_in.is_some() || update_columns.is_empty() {
        update_columns.push(entity::user::Column::LastSignedIn);
    }
    update_columns.push(entity::user::Column::UpdatedAt);

    let model = entity::user::ActiveModel {
        open_id: ActiveValue::Set(param.open_id),
        name: ActiveValue::Set(param.name.flatten()),
        email: ActiveValue::Set(param.email.flatten()),
        login_method: ActiveValue::Set(param.login_method.flatten()),
        role: ActiveValue::Set(role.unwrap_or(AccountRole::User).as_str().to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        last_signed_in: ActiveValue::Set(param.last_signed_in.unwrap_or(now)),
        ..Default::default()
    };

    (model, update_columns)
}
