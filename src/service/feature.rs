//! Feature toggle service.

use sea_orm::DatabaseConnection;

use crate::{
    data::feature::FeatureSettingRepository,
    error::AppError,
    model::feature::{FeatureSetting, SetFeatureSettingsParam},
    store::Store,
    util::{
        key_lock::LockKey,
        validate::{require_id, require_text},
    },
};

/// Service providing per-server feature toggles and settings.
pub struct FeatureService<'a> {
    store: &'a Store,
}

impl<'a> FeatureService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Gets the setting of one feature in one server.
    ///
    /// # Returns
    /// - `Ok(Some(FeatureSetting))` - Feature has been configured
    /// - `Ok(None)` - Never configured, store unavailable, or the read failed
    /// - `Err(AppError::InvalidInput)` - The server ID or feature name is missing
    pub async fn get_feature_settings(
        &self,
        server_id: u64,
        feature_name: &str,
    ) -> Result<Option<FeatureSetting>, AppError> {
        require_id("server_id", server_id)?;
        require_text("feature_name", feature_name)?;

        let Some(db) = self.store.connection_for("get feature settings").await else {
            return Ok(None);
        };

        match FeatureSettingRepository::new(db).find(server_id, feature_name).await {
            Ok(setting) => Ok(setting),
            Err(e) => {
                tracing::error!(server_id, feature_name, "[Database] Failed to get feature settings: {}", e);
                Ok(None)
            }
        }
    }

    /// Writes the setting of one feature, updating in place or inserting if absent.
    ///
    /// The settings blob is replaced wholesale, never merged.
    ///
    /// # Returns
    /// - `Ok(Some(FeatureSetting))` - The stored setting
    /// - `Ok(None)` - Store unavailable or a store operation failed
    /// - `Err(AppError::InvalidInput)` - The server ID or feature name is missing
    pub async fn set_feature_settings(
        &self,
        param: SetFeatureSettingsParam,
    ) -> Result<Option<FeatureSetting>, AppError> {
        let server_id = require_id("server_id", param.server_id)?;
        require_text("feature_name", &param.feature_name)?;

        let Some(db) = self.store.connection_for("set feature settings").await else {
            return Ok(None);
        };

        let _guard = self
            .store
            .locks()
            .lock(LockKey::Feature {
                server_id,
                feature_name: param.feature_name.clone(),
            })
            .await;

        let feature_name = param.feature_name.clone();
        match apply_setting(db, param).await {
            Ok(setting) => Ok(Some(setting)),
            Err(e) => {
                tracing::error!(server_id, %feature_name, "[Database] Failed to set feature settings: {}", e);
                Ok(None)
            }
        }
    }
}

async fn apply_setting(
    db: &DatabaseConnection,
    param: SetFeatureSettingsParam,
) -> Result<FeatureSetting, AppError> {
    let repo = FeatureSettingRepository::new(db);
    let (server_id, feature_name) = (param.server_id, param.feature_name.clone());

    if repo.find(server_id, &feature_name).await?.is_none() {
        return repo.create(param).await;
    }

    repo.update(param).await?;
    repo.find(server_id, &feature_name)
        .await?
        .ok_or_else(|| AppError::DbErr(sea_orm::DbErr::RecordNotFound(feature_name)))
}
