//! Error types for the modboard data layer.
//!
//! `AppError` is the top-level error returned by services and repositories. Store
//! unavailability is deliberately absent from this hierarchy: a missing connection is
//! reported as an empty result plus a logged warning, never as an `Err`.

pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion with `?`. Services surface
/// `InvalidInput` to callers and swallow the store-related variants for every
/// per-feature operation, logging them instead.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Cron scheduler error from the role expiry sweeper.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Stored data that could not be converted into a domain model.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// A required identifier or field was missing on a call into the data layer.
    ///
    /// Raised before any I/O. This is the one failure callers must always handle.
    ///
    /// # Fields
    /// - Message naming the missing or invalid field
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
