//! Transaction data repository for the economy audit trail.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::{
    data::readable_rows,
    error::AppError,
    model::{balance::AddBalanceParam, transaction::Transaction},
};

/// Repository providing append and read operations for the `transactions` table.
pub struct TransactionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TransactionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends one transaction row for a balance mutation.
    ///
    /// # Arguments
    /// - `param` - The balance mutation; its requested `amount` is recorded verbatim
    ///
    /// # Returns
    /// - `Ok(Transaction)` - The appended row
    /// - `Err(AppError)` - Database error during insert
    pub async fn create(&self, param: &AddBalanceParam) -> Result<Transaction, AppError> {
        let entity = entity::transaction::ActiveModel {
            server_id: ActiveValue::Set(param.server_id.to_string()),
            user_id: ActiveValue::Set(param.user_id.to_string()),
            amount: ActiveValue::Set(param.amount),
            kind: ActiveValue::Set(param.kind.clone()),
            description: ActiveValue::Set(param.description.clone()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Transaction::from_entity(entity)
    }

    /// Gets the most recent transactions of a member, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Transaction>)` - At most `limit` rows, descending by creation time
    /// - `Err(AppError)` - Database error
    pub async fn list(
        &self,
        server_id: u64,
        user_id: u64,
        limit: u64,
    ) -> Result<Vec<Transaction>, AppError> {
        let entities = entity::prelude::Transaction::find()
            .filter(entity::transaction::Column::ServerId.eq(server_id.to_string()))
            .filter(entity::transaction::Column::UserId.eq(user_id.to_string()))
            .order_by_desc(entity::transaction::Column::CreatedAt)
            .order_by_desc(entity::transaction::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(readable_rows(
            "transactions",
            entities,
            |entity| entity.id,
            Transaction::from_entity,
        ))
    }
}
