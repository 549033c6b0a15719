//! SeaORM entity models for every table owned by the modboard data layer.
//!
//! Discord snowflakes are stored as strings, matching the column layout the
//! dashboard has always used. Conversion to numeric IDs happens at the
//! repository boundary in the main crate.

pub mod prelude;

pub mod discord_server;
pub mod feature_setting;
pub mod message_log;
pub mod moderation_log;
pub mod transaction;
pub mod user;
pub mod user_balance;
pub mod user_role;
pub mod user_warning;
