//! Service layer for business logic and orchestration.
//!
//! Services sit between callers (event handlers, dashboard endpoints) and the
//! repositories. Every service borrows the process-wide [`Store`](crate::store::Store)
//! and implements the same failure contract:
//!
//! - Missing required input is returned as `Err(AppError::InvalidInput)` before any I/O.
//! - An unavailable store is logged as a warning and yields the operation's empty result.
//! - A failing store operation is logged as an error and yields the same empty result.
//!
//! The one exception is account registration in [`user`], which re-throws store
//! failures. Read-modify-write sequences run under the store's per-key locks.

pub mod economy;
pub mod feature;
pub mod leaderboard;
pub mod message_log;
pub mod moderation;
pub mod role;
pub mod server;
pub mod user;

#[cfg(test)]
mod test;
