//! User balance data repository for database operations.
//!
//! This module provides the `UserBalanceRepository` for reading, creating and updating
//! per-member economy rows, plus the leaderboard query over the same table.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    data::readable_rows,
    error::AppError,
    model::balance::{level_for_xp, LeaderboardMetric, UserBalance},
};

/// Repository providing database operations for the `user_balance` table.
pub struct UserBalanceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserBalanceRepository<'a> {
    /// Creates a new UserBalanceRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserBalanceRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the balance row of a member.
    ///
    /// # Arguments
    /// - `server_id` - Discord server ID
    /// - `user_id` - Discord user ID
    ///
    /// # Returns
    /// - `Ok(Some(UserBalance))` - Row exists
    /// - `Ok(None)` - Member has no economy row yet
    /// - `Err(AppError)` - Database error or unparsable stored ID
    pub async fn find(&self, server_id: u64, user_id: u64) -> Result<Option<UserBalance>, AppError> {
        let entity = entity::prelude::UserBalance::find()
            .filter(entity::user_balance::Column::ServerId.eq(server_id.to_string()))
            .filter(entity::user_balance::Column::UserId.eq(user_id.to_string()))
            .one(self.db)
            .await?;

        entity.map(UserBalance::from_entity).transpose()
    }

    /// Inserts a zeroed balance row at level 1.
    ///
    /// # Arguments
    /// - `server_id` - Discord server ID
    /// - `user_id` - Discord user ID
    ///
    /// # Returns
    /// - `Ok(UserBalance)` - The created row
    /// - `Err(AppError)` - Database error, including a unique violation if the row exists
    pub async fn create(&self, server_id: u64, user_id: u64) -> Result<UserBalance, AppError> {
        let now = Utc::now();
        let entity = entity::user_balance::ActiveModel {
            server_id: ActiveValue::Set(server_id.to_string()),
            user_id: ActiveValue::Set(user_id.to_string()),
            balance: ActiveValue::Set(0),
            xp: ActiveValue::Set(0),
            level: ActiveValue::Set(level_for_xp(0)),
            reputation: ActiveValue::Set(0),
            last_daily_reward: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        UserBalance::from_entity(entity)
    }

    /// Overwrites the stored balance of a member.
    ///
    /// The caller is responsible for clamping; this writes `balance` as given.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated (0 if the member has no row)
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn set_balance(
        &self,
        server_id: u64,
        user_id: u64,
        balance: i64,
    ) -> Result<u64, AppError> {
        let result = entity::prelude::UserBalance::update_many()
            .filter(entity::user_balance::Column::ServerId.eq(server_id.to_string()))
            .filter(entity::user_balance::Column::UserId.eq(user_id.to_string()))
            .col_expr(entity::user_balance::Column::Balance, Expr::value(balance))
            .col_expr(entity::user_balance::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Overwrites xp and the level derived from it in a single update statement.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated (0 if the member has no row)
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn set_xp(&self, server_id: u64, user_id: u64, xp: i64) -> Result<u64, AppError> {
        let result = entity::prelude::UserBalance::update_many()
            .filter(entity::user_balance::Column::ServerId.eq(server_id.to_string()))
            .filter(entity::user_balance::Column::UserId.eq(user_id.to_string()))
            .col_expr(entity::user_balance::Column::Xp, Expr::value(xp))
            .col_expr(
                entity::user_balance::Column::Level,
                Expr::value(level_for_xp(xp)),
            )
            .col_expr(entity::user_balance::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets the top balance rows of a server ranked by `metric`.
    ///
    /// Rows are ordered by the metric descending, then by numeric user ID and row ID
    /// ascending so that ties always come back in the same order.
    ///
    /// # Arguments
    /// - `server_id` - Discord server ID
    /// - `metric` - Column to rank by
    /// - `limit` - Maximum number of rows returned
    ///
    /// # Returns
    /// - `Ok(Vec<UserBalance>)` - Ranked rows, at most `limit`
    /// - `Err(AppError)` - Database error
    pub async fn leaderboard(
        &self,
        server_id: u64,
        metric: LeaderboardMetric,
        limit: u64,
    ) -> Result<Vec<UserBalance>, AppError> {
        let column = match metric {
            LeaderboardMetric::Balance => entity::user_balance::Column::Balance,
            LeaderboardMetric::Xp => entity::user_balance::Column::Xp,
            LeaderboardMetric::Reputation => entity::user_balance::Column::Reputation,
        };

        let entities = entity::prelude::UserBalance::find()
            .filter(entity::user_balance::Column::ServerId.eq(server_id.to_string()))
            .order_by_desc(column)
            // Stored IDs are canonical decimal, so shorter text is the smaller number.
            .order_by_asc(Expr::cust("LENGTH(user_id)"))
            .order_by_asc(entity::user_balance::Column::UserId)
            .order_by_asc(entity::user_balance::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(readable_rows(
            "user_balance",
            entities,
            |entity| entity.id,
            UserBalance::from_entity,
        ))
    }
}
