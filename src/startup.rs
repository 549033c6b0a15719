use crate::{config::Config, error::AppError, store::Store};

/// Connects to the configured database, runs pending migrations and wraps the
/// connection in a [`Store`].
///
/// A missing `DATABASE_URL` or a failed connection does not abort startup: the store is
/// returned unavailable and every component degrades to empty reads and no-op writes.
/// Migration failures do abort, since the schema would not match the entities.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(Store)` - Connected store with migrations applied, or an unavailable store
/// - `Err(AppError::DbErr)` - Failed to run migrations
pub async fn connect_to_store(config: &Config) -> Result<Store, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let Some(url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL is not set, running without a database");
        return Ok(Store::unavailable());
    };

    let mut opt = ConnectOptions::new(url);
    opt.sqlx_logging(false);

    let db = match Database::connect(opt).await {
        Ok(db) => db,
        Err(e) => {
            tracing::warn!("[Database] Failed to connect: {}", e);
            return Ok(Store::unavailable());
        }
    };

    Migrator::up(&db, None).await?;
    tracing::info!("Database migrations applied");

    Ok(Store::from_connection(db))
}
