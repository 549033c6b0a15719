use crate::{error::AppError, store::Store};
use sea_orm::EntityTrait;
use test_utils::builder::TestBuilder;


/// Builds a store over an in-memory database holding every table.
async fn store_with_all_tables() -> Store {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    Store::from_connection(test.db.unwrap())
}

/// Builds a store over an in-memory database with no tables, so every query fails.
async fn store_without_tables() -> Store {
    let test = TestBuilder::new().build().await.unwrap();
    Store::from_connection(test.db.unwrap())
}
