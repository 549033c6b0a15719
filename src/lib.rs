//! Data layer for a Discord server-management dashboard.
//!
//! The crate persists and mutates per-server state: member balances, XP and levels with
//! their transaction trail, the moderation ledger and warning counters, role grants,
//! feature toggles, message audit logs, server registrations and dashboard accounts.
//!
//! Callers construct one [`store::Store`] at startup and pass it by reference into the
//! services under [`service`]. Every service tolerates an absent store by returning
//! empty results, and serializes read-modify-write sequences per key.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod store;
pub mod util;
