use crate::error::{config::ConfigError, AppError};

const DEFAULT_ROLE_EXPIRY_SCHEDULE: &str = "0 * * * * *";

pub struct Config {
    /// Absent means the data layer runs without a store.
    pub database_url: Option<String>,

    /// Dashboard account granted the admin role on registration.
    pub owner_open_id: Option<String>,

    pub role_expiry_sweep: bool,
    pub role_expiry_schedule: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: optional_var("DATABASE_URL"),
            owner_open_id: optional_var("OWNER_OPEN_ID"),
            role_expiry_sweep: parse_bool("ROLE_EXPIRY_SWEEP", optional_var("ROLE_EXPIRY_SWEEP"))?,
            role_expiry_schedule: optional_var("ROLE_EXPIRY_SCHEDULE")
                .unwrap_or_else(|| DEFAULT_ROLE_EXPIRY_SCHEDULE.to_string()),
        })
    }
}

fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_bool(name: &str, value: Option<String>) -> Result<bool, ConfigError> {
    match value.as_deref().map(str::trim) {
        None => Ok(false),
        Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => Ok(true),
        Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => Ok(false),
        Some(v) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: v.to_string(),
        }),
    }
}
