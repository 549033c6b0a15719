//! Domain models and operation parameters.
//!
//! Domain models are converted from entity models at the repository boundary, turning
//! stored string snowflakes into `u64` identifiers. Parameter types carry the inputs of
//! multi-field operations from callers through services into repositories.

pub mod balance;
pub mod feature;
pub mod message_log;
pub mod moderation;
pub mod role;
pub mod server;
pub mod transaction;
pub mod user;
