//! Background jobs run by the startup binary.
//!
//! Core services never schedule work themselves; jobs here are separate collaborators
//! that call into the service layer on a cron schedule.

pub mod role_expiry;
