//! Feature setting data repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    EntityTrait, QueryFilter,
};

use crate::{
    error::AppError,
    model::feature::{FeatureSetting, SetFeatureSettingsParam},
};

/// Repository providing database operations for per-server feature settings.
pub struct FeatureSettingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeatureSettingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the setting row of one feature in one server.
    ///
    /// # Returns
    /// - `Ok(Some(FeatureSetting))` - Feature has been configured
    /// - `Ok(None)` - Feature has never been configured for this server
    /// - `Err(AppError)` - Database error or unparsable stored ID
    pub async fn find(
        &self,
        server_id: u64,
        feature_name: &str,
    ) -> Result<Option<FeatureSetting>, AppError> {
        let entity = entity::prelude::FeatureSetting::find()
            .filter(entity::feature_setting::Column::ServerId.eq(server_id.to_string()))
            .filter(entity::feature_setting::Column::FeatureName.eq(feature_name))
            .one(self.db)
            .await?;

        entity.map(FeatureSetting::from_entity).transpose()
    }

    /// Inserts a feature setting row.
    ///
    /// # Returns
    /// - `Ok(FeatureSetting)` - The created row
    /// - `Err(AppError)` - Database error, including a unique violation if the row exists
    pub async fn create(&self, param: SetFeatureSettingsParam) -> Result<FeatureSetting, AppError> {
        let now = Utc::now();
        let entity = entity::feature_setting::ActiveModel {
            server_id: ActiveValue::Set(param.server_id.to_string()),
            feature_name: ActiveValue::Set(param.feature_name),
            is_enabled: ActiveValue::Set(param.is_enabled),
            settings: ActiveValue::Set(param.settings),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        FeatureSetting::from_entity(entity)
    }

    /// Replaces the enabled flag and settings blob of an existing row.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated (0 if the feature was never configured)
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, param: SetFeatureSettingsParam) -> Result<u64, AppError> {
        let result = entity::prelude::FeatureSetting::update_many()
            .filter(entity::feature_setting::Column::ServerId.eq(param.server_id.to_string()))
            .filter(entity::feature_setting::Column::FeatureName.eq(param.feature_name))
            .col_expr(
                entity::feature_setting::Column::IsEnabled,
                Expr::value(param.is_enabled),
            )
            .col_expr(
                entity::feature_setting::Column::Settings,
                Expr::value(param.settings),
            )
            .col_expr(
                entity::feature_setting::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
