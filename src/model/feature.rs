use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// Per-server toggle and settings blob for one named feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureSetting {
    pub server_id: u64,
    pub feature_name: String,
    pub is_enabled: bool,
    /// Opaque settings, conventionally a JSON document.
    pub settings: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl FeatureSetting {
    pub fn from_entity(entity: entity::feature_setting::Model) -> Result<Self, AppError> {
        Ok(Self {
            server_id: parse_u64_from_string(entity.server_id)?,
            feature_name: entity.feature_name,
            is_enabled: entity.is_enabled,
            settings: entity.settings,
            updated_at: entity.updated_at,
        })
    }

    /// Parses the settings blob as JSON.
    ///
    /// # Returns
    /// - `Ok(None)` - No settings are stored
    /// - `Ok(Some(Value))` - Parsed settings document
    /// - `Err(serde_json::Error)` - Stored settings are not valid JSON
    pub fn settings_json(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        self.settings
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
    }
}

/// Parameters for writing a feature setting.
///
/// `settings` replaces the stored blob wholesale, including clearing it when `None`.
#[derive(Debug, Clone)]
pub struct SetFeatureSettingsParam {
    pub server_id: u64,
    pub feature_name: String,
    pub is_enabled: bool,
    pub settings: Option<String>,
}
