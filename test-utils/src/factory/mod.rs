//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests.
//! Each entity has its own module with a `Factory` builder for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let balance = factory::create_balance(&db, "1", "2").await?;
//!     let grant = factory::create_role_grant(&db, "1", "2", "3").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let balance = factory::user_balance::UserBalanceFactory::new(&db)
//!     .server_id("1")
//!     .balance(300)
//!     .xp(2500)
//!     .build()
//!     .await?;
//! ```

pub mod discord_server;
pub mod feature_setting;
pub mod helpers;
pub mod moderation_log;
pub mod user;
pub mod user_balance;
pub mod user_role;
pub mod user_warning;

pub use discord_server::create_server;
pub use feature_setting::create_feature_setting;
pub use moderation_log::create_moderation_log;
pub use user::create_user;
pub use user_balance::{create_balance, create_balance_with_amount};
pub use user_role::create_role_grant;
pub use user_warning::create_warning;
