use std::sync::Arc;

use modboard::{config::Config, error::AppError, scheduler::role_expiry, startup};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let store = Arc::new(startup::connect_to_store(&config).await?);

    let mut scheduler = if config.role_expiry_sweep {
        Some(role_expiry::start_scheduler(store.clone(), &config.role_expiry_schedule).await?)
    } else {
        None
    };

    tracing::info!("Data layer ready");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("Shutting down");

    if let Some(scheduler) = scheduler.as_mut() {
        scheduler.shutdown().await?;
    }
    drop(scheduler);

    match Arc::try_unwrap(store) {
        Ok(store) => store.close().await,
        Err(_) => tracing::debug!("Store still shared at shutdown, dropping connection"),
    }

    Ok(())
}
