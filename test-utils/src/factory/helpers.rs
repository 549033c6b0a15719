//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Generates a unique snowflake-shaped Discord ID string.
///
/// The value always parses as a non-zero `u64`.
pub fn next_snowflake() -> String {
    (100_000_000_000_000_000 + next_id()).to_string()
}

/// Creates one balance row per `(user_id, balance)` pair in the given server.
///
/// # Arguments
/// - `db` - Database connection
/// - `server_id` - Discord server ID shared by all rows
/// - `balances` - User ID and balance for each row, inserted in order
///
/// # Returns
/// - `Ok(Vec<Model>)` - Created rows in insertion order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_balances(
    db: &DatabaseConnection,
    server_id: &str,
    balances: &[(&str, i64)],
) -> Result<Vec<entity::user_balance::Model>, DbErr> {
    let mut created = Vec::with_capacity(balances.len());
    for (user_id, balance) in balances {
        created.push(
            crate::factory::user_balance::create_balance_with_amount(
                db, server_id, *user_id, *balance,
            )
            .await?,
        );
    }

    Ok(created)
}
