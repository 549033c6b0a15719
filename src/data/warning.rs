//! User warning data repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    EntityTrait, QueryFilter,
};

use crate::{error::AppError, model::moderation::UserWarning};

/// Repository providing database operations for the `user_warnings` counters.
pub struct UserWarningRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserWarningRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the warning counter of a member.
    ///
    /// # Returns
    /// - `Ok(Some(UserWarning))` - Counter row exists
    /// - `Ok(None)` - Member has never been warned
    /// - `Err(AppError)` - Database error or invalid stored data
    pub async fn find(&self, server_id: u64, user_id: u64) -> Result<Option<UserWarning>, AppError> {
        let entity = entity::prelude::UserWarning::find()
            .filter(entity::user_warning::Column::ServerId.eq(server_id.to_string()))
            .filter(entity::user_warning::Column::UserId.eq(user_id.to_string()))
            .one(self.db)
            .await?;

        entity.map(UserWarning::from_entity).transpose()
    }

    /// Inserts the first warning of a member with a count of 1.
    ///
    /// # Returns
    /// - `Ok(UserWarning)` - The created counter
    /// - `Err(AppError)` - Database error, including a unique violation if the row exists
    pub async fn create(&self, server_id: u64, user_id: u64) -> Result<UserWarning, AppError> {
        let now = Utc::now();
        let entity = entity::user_warning::ActiveModel {
            server_id: ActiveValue::Set(server_id.to_string()),
            user_id: ActiveValue::Set(user_id.to_string()),
            warn_count: ActiveValue::Set(1),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        UserWarning::from_entity(entity)
    }

    /// Overwrites the warning count of a member.
    ///
    /// Counts above `i32::MAX` are stored as `i32::MAX`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated (0 if the member has no counter)
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn set_count(&self, server_id: u64, user_id: u64, count: u32) -> Result<u64, AppError> {
        let count = i32::try_from(count).unwrap_or(i32::MAX);
        let result = entity::prelude::UserWarning::update_many()
            .filter(entity::user_warning::Column::ServerId.eq(server_id.to_string()))
            .filter(entity::user_warning::Column::UserId.eq(user_id.to_string()))
            .col_expr(entity::user_warning::Column::WarnCount, Expr::value(count))
            .col_expr(entity::user_warning::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
