use crate::{
    data::feature::FeatureSettingRepository, error::AppError,
    model::feature::SetFeatureSettingsParam,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find;

fn param(is_enabled: bool, settings: Option<&str>) -> SetFeatureSettingsParam {
    SetFeatureSettingsParam {
        server_id: 1,
        feature_name: "welcome".to_string(),
        is_enabled,
        settings: settings.map(str::to_string),
    }
}
