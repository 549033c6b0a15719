//! Economy service for balances, XP and the transaction trail.
//!
//! Balance and XP mutations are read-modify-write sequences. Each one holds the
//! member's [`LockKey::Balance`] guard from the initial read through the final write,
//! so concurrent grants for the same member never lose an update.

use sea_orm::DatabaseConnection;

use crate::{
    data::{balance::UserBalanceRepository, transaction::TransactionRepository},
    error::AppError,
    model::{
        balance::{clamp_balance, AddBalanceParam, UserBalance},
        transaction::Transaction,
    },
    store::Store,
    util::{
        key_lock::LockKey,
        validate::{require_id, require_text},
    },
};

/// Number of transactions returned by [`EconomyService::list_transactions`] by default.
pub const DEFAULT_TRANSACTION_LIMIT: u64 = 50;

/// Service providing the counter and balance engine.
pub struct EconomyService<'a> {
    store: &'a Store,
}

impl<'a> EconomyService<'a> {
    /// Creates a new EconomyService instance.
    ///
    /// # Arguments
    /// - `store` - Reference to the process-wide store handle
    ///
    /// # Returns
    /// - `EconomyService` - New service instance
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Gets a member's balance row, creating a zeroed one if absent.
    ///
    /// Calling this twice without an intervening mutation returns identical records and
    /// inserts only on the first call.
    ///
    /// # Arguments
    /// - `server_id` - Discord server ID (required)
    /// - `user_id` - Discord user ID (required)
    ///
    /// # Returns
    /// - `Ok(Some(UserBalance))` - Fully populated balance row
    /// - `Ok(None)` - Store unavailable or the store operation failed
    /// - `Err(AppError::InvalidInput)` - An identifier is missing
    pub async fn get_or_create_balance(
        &self,
        server_id: u64,
        user_id: u64,
    ) -> Result<Option<UserBalance>, AppError> {
        require_id("server_id", server_id)?;
        require_id("user_id", user_id)?;

        let Some(db) = self.store.connection_for("get balance").await else {
            return Ok(None);
        };

        let _guard = self
            .store
            .locks()
            .lock(LockKey::Balance { server_id, user_id })
            .await;

        match load_or_create(db, server_id, user_id).await {
            Ok(balance) => Ok(Some(balance)),
            Err(e) => {
                tracing::error!(server_id, user_id, "[Database] Failed to get balance: {}", e);
                Ok(None)
            }
        }
    }

    /// Adds a signed amount to a member's balance, floored at zero.
    ///
    /// The transaction row records the requested amount, which for an overdrawn
    /// withdrawal is larger in magnitude than the applied change. The row is written
    /// after the balance update as a separate statement.
    ///
    /// # Arguments
    /// - `param` - Member, signed amount, transaction type and optional description
    ///
    /// # Returns
    /// - `Ok(Some(i64))` - The new balance
    /// - `Ok(None)` - Store unavailable or a store operation failed
    /// - `Err(AppError::InvalidInput)` - An identifier or the transaction type is missing
    pub async fn add_balance(&self, param: AddBalanceParam) -> Result<Option<i64>, AppError> {
        let server_id = require_id("server_id", param.server_id)?;
        let user_id = require_id("user_id", param.user_id)?;
        require_text("type", &param.kind)?;

        let Some(db) = self.store.connection_for("add balance").await else {
            return Ok(None);
        };

        let _guard = self
            .store
            .locks()
            .lock(LockKey::Balance { server_id, user_id })
            .await;

        match apply_balance(db, &param).await {
            Ok(balance) => Ok(Some(balance)),
            Err(e) => {
                tracing::error!(server_id, user_id, "[Database] Failed to add balance: {}", e);
                Ok(None)
            }
        }
    }

    /// Adds experience points to a member and recomputes their level.
    ///
    /// XP and level are written together in one update statement.
    ///
    /// # Arguments
    /// - `server_id` - Discord server ID (required)
    /// - `user_id` - Discord user ID (required)
    /// - `xp_amount` - Experience points to add
    ///
    /// # Returns
    /// - `Ok(())` - XP added, or the store was unavailable or failed (logged)
    /// - `Err(AppError::InvalidInput)` - An identifier is missing
    pub async fn add_xp(&self, server_id: u64, user_id: u64, xp_amount: u32) -> Result<(), AppError> {
        require_id("server_id", server_id)?;
        require_id("user_id", user_id)?;

        let Some(db) = self.store.connection_for("add XP").await else {
            return Ok(());
        };

        let _guard = self
            .store
            .locks()
            .lock(LockKey::Balance { server_id, user_id })
            .await;

        if let Err(e) = apply_xp(db, server_id, user_id, xp_amount).await {
            tracing::error!(server_id, user_id, "[Database] Failed to add XP: {}", e);
        }

        Ok(())
    }

    /// Gets a member's most recent transactions, newest first.
    ///
    /// # Arguments
    /// - `server_id` - Discord server ID (required)
    /// - `user_id` - Discord user ID (required)
    /// - `limit` - Maximum rows returned, [`DEFAULT_TRANSACTION_LIMIT`] if `None`
    ///
    /// # Returns
    /// - `Ok(Vec<Transaction>)` - Transactions, empty if the store is unavailable or failed
    /// - `Err(AppError::InvalidInput)` - An identifier is missing
    pub async fn list_transactions(
        &self,
        server_id: u64,
        user_id: u64,
        limit: Option<u64>,
    ) -> Result<Vec<Transaction>, AppError> {
        require_id("server_id", server_id)?;
        require_id("user_id", user_id)?;

        let Some(db) = self.store.connection_for("list transactions").await else {
            return Ok(Vec::new());
        };

        let limit = limit.unwrap_or(DEFAULT_TRANSACTION_LIMIT);
        match TransactionRepository::new(db).list(server_id, user_id, limit).await {
            Ok(transactions) => Ok(transactions),
            Err(e) => {
                tracing::error!(server_id, user_id, "[Database] Failed to list transactions: {}", e);
                Ok(Vec::new())
            }
        }
    }
}

/// Reads a member's balance row, inserting a zeroed row if none exists.
///
/// Callers must hold the member's balance lock.
async fn load_or_create(
    db: &DatabaseConnection,
    server_id: u64,
    user_id: u64,
) -> Result<UserBalance, AppError> {
    let repo = UserBalanceRepository::new(db);

    if let Some(balance) = repo.find(server_id, user_id).await? {
        return Ok(balance);
    }

    let balance = repo.create(server_id, user_id).await?;
    tracing::debug!(server_id, user_id, "Created balance row");

    Ok(balance)
}

async fn apply_balance(db: &DatabaseConnection, param: &AddBalanceParam) -> Result<i64, AppError> {
    let current = load_or_create(db, param.server_id, param.user_id).await?;
    let new_balance = clamp_balance(current.balance, param.amount);

    UserBalanceRepository::new(db)
        .set_balance(param.server_id, param.user_id, new_balance)
        .await?;
    TransactionRepository::new(db).create(param).await?;

    tracing::debug!(
        server_id = param.server_id,
        user_id = param.user_id,
        amount = param.amount,
        balance = new_balance,
        "Applied balance change"
    );

    Ok(new_balance)
}

async fn apply_xp(
    db: &DatabaseConnection,
    server_id: u64,
    user_id: u64,
    xp_amount: u32,
) -> Result<(), AppError> {
    let current = load_or_create(db, server_id, user_id).await?;
    let new_xp = current.xp.saturating_add(i64::from(xp_amount));

    UserBalanceRepository::new(db)
        .set_xp(server_id, user_id, new_xp)
        .await?;

    tracing::debug!(server_id, user_id, xp = new_xp, "Applied XP change");

    Ok(())
}
