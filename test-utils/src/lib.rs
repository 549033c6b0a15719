//! Modboard Test Utils
//!
//! Provides shared testing utilities for the modboard data layer. This crate offers a builder
//! pattern for creating test contexts with in-memory SQLite databases, fixtures for in-memory
//! entity models, and factories that insert rows with sensible defaults.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::UserBalance;
//!
//! #[tokio::test]
//! async fn test_balance_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(UserBalance)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
