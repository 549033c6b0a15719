//! User balance factory for creating test economy rows.

use crate::{factory::helpers::next_snowflake, fixture};
use entity::user_balance;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test balance rows with customizable fields.
///
/// Defaults are sourced from `fixture::user_balance`, with a unique user ID per factory.
/// The stored level is derived from xp, matching what the economy writes.
///
/// # Example
///
/// ```rust,ignore
/// let row = UserBalanceFactory::new(&db)
///     .server_id("1")
///     .user_id("2")
///     .balance(250)
///     .build()
///     .await?;
/// ```
pub struct UserBalanceFactory<'a> {
    db: &'a DatabaseConnection,
    entity: fixture::user_balance::UserBalanceEntityBuilder,
}

impl<'a> UserBalanceFactory<'a> {
    /// Creates a new factory with a zeroed balance for a fresh user.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            entity: fixture::user_balance::entity_builder().user_id(next_snowflake()),
        }
    }

    pub fn server_id(mut self, server_id: impl Into<String>) -> Self {
        self.entity = self.entity.server_id(server_id);
        self
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.entity = self.entity.user_id(user_id);
        self
    }

    pub fn balance(mut self, balance: i64) -> Self {
        self.entity = self.entity.balance(balance);
        self
    }

    pub fn xp(mut self, xp: i64) -> Self {
        self.entity = self.entity.xp(xp);
        self
    }

    pub fn reputation(mut self, reputation: i32) -> Self {
        self.entity = self.entity.reputation(reputation);
        self
    }

    /// Builds and inserts the balance row.
    ///
    /// # Returns
    /// - `Ok(Model)` - Created balance row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<user_balance::Model, DbErr> {
        let entity = self.entity.build();
        user_balance::ActiveModel {
            server_id: ActiveValue::Set(entity.server_id),
            user_id: ActiveValue::Set(entity.user_id),
            balance: ActiveValue::Set(entity.balance),
            xp: ActiveValue::Set(entity.xp),
            level: ActiveValue::Set(entity.level),
            reputation: ActiveValue::Set(entity.reputation),
            last_daily_reward: ActiveValue::Set(None),
            created_at: ActiveValue::Set(entity.created_at),
            updated_at: ActiveValue::Set(entity.updated_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a zeroed balance row for the given server and user.
pub async fn create_balance(
    db: &DatabaseConnection,
    server_id: impl Into<String>,
    user_id: impl Into<String>,
) -> Result<user_balance::Model, DbErr> {
    UserBalanceFactory::new(db)
        .server_id(server_id)
        .user_id(user_id)
        .build()
        .await
}

/// Creates a balance row holding `balance` coins for the given server and user.
pub async fn create_balance_with_amount(
    db: &DatabaseConnection,
    server_id: impl Into<String>,
    user_id: impl Into<String>,
    balance: i64,
) -> Result<user_balance::Model, DbErr> {
    UserBalanceFactory::new(db)
        .server_id(server_id)
        .user_id(user_id)
        .balance(balance)
        .build()
        .await
}
