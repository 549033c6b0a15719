//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests and supply the default values
//! used by factory builders. Unlike factories, fixtures do NOT insert data into the
//! database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let balance = fixture::user_balance::entity();
//!
//! let rich = fixture::user_balance::entity_builder()
//!     .balance(5000)
//!     .build();
//! ```

pub mod user_balance;
pub mod user_role;

pub use user_balance::{entity as user_balance_entity, entity_builder as user_balance_entity_builder};
pub use user_role::{entity as user_role_entity, entity_builder as user_role_entity_builder};
