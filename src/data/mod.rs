//! Database repository layer for all domain entities.
//!
//! Each repository wraps a borrowed `DatabaseConnection` and performs single-purpose
//! reads and writes over one table. Repositories use SeaORM entity models internally and
//! return domain models, converting stored snowflake strings at this boundary. They hold
//! no locks and make no degradation decisions; both belong to the service layer.

pub mod balance;
pub mod feature;
pub mod message_log;
pub mod moderation_log;
pub mod role;
pub mod server;
pub mod transaction;
pub mod user;
pub mod warning;

use crate::error::AppError;

/// Converts listed rows into domain models, dropping rows whose stored values no
/// longer parse.
///
/// A single corrupt row would otherwise fail the whole listing. Each dropped row is
/// logged with its table and row ID.
///
/// # Arguments
/// - `table` - Table name used in the log line
/// - `entities` - Rows as returned by the query
/// - `row_id` - Extracts the row ID for logging
/// - `convert` - Entity to domain model conversion
///
/// # Returns
/// - `Vec<T>` - Converted rows in query order
pub(crate) fn readable_rows<E, T>(
    table: &'static str,
    entities: Vec<E>,
    row_id: impl Fn(&E) -> i32,
    convert: impl Fn(E) -> Result<T, AppError>,
) -> Vec<T> {
    entities
        .into_iter()
        .filter_map(|entity| {
            let id = row_id(&entity);
            match convert(entity) {
                Ok(model) => Some(model),
                Err(e) => {
                    tracing::warn!(table, row_id = id, "[Database] Skipping unreadable row: {}", e);
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod test;
