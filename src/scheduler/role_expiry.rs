use chrono::Utc;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, service::role::RoleService, store::Store};

/// Starts the temporary role expiry scheduler
///
/// On each tick the job deletes temporary role grants whose expiry has passed. The
/// returned scheduler keeps running until it is shut down or dropped with the runtime.
///
/// # Arguments
/// - `store`: Shared store handle
/// - `schedule`: 6-field cron expression, seconds first (e.g. `"0 * * * * *"`)
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler
/// - `Err(AppError::SchedulerErr)` - Invalid schedule or scheduler failure
pub async fn start_scheduler(store: Arc<Store>, schedule: &str) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let store = store.clone();

        Box::pin(async move {
            sweep_expired_roles(&store).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!(schedule, "Role expiry scheduler started");

    Ok(scheduler)
}

/// Removes expired temporary role grants once
async fn sweep_expired_roles(store: &Store) {
    match RoleService::new(store).sweep_expired(Utc::now()).await {
        Some(0) | None => {}
        Some(removed) => tracing::info!(removed, "Removed expired temporary roles"),
    }
}
