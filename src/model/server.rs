use std::fmt;

use chrono::{DateTime, Utc};

use crate::{
    error::AppError,
    util::parse::{parse_optional_u64, parse_u64_from_string},
};

/// Prefix assigned to newly registered servers.
pub const DEFAULT_PREFIX: &str = "!";

/// Registration record of a Discord server managed through the dashboard.
#[derive(Clone, PartialEq)]
pub struct DiscordServer {
    pub server_id: u64,
    pub server_name: Option<String>,
    pub owner_id: Option<u64>,
    pub bot_token: Option<String>,
    pub prefix: String,
    pub created_at: DateTime<Utc>,
}

impl DiscordServer {
    pub fn from_entity(entity: entity::discord_server::Model) -> Result<Self, AppError> {
        Ok(Self {
            server_id: parse_u64_from_string(entity.server_id)?,
            server_name: entity.server_name,
            owner_id: parse_optional_u64(entity.owner_id)?,
            bot_token: entity.bot_token,
            prefix: entity.prefix,
            created_at: entity.created_at,
        })
    }
}

// Keeps bot tokens out of logs.
impl fmt::Debug for DiscordServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscordServer")
            .field("server_id", &self.server_id)
            .field("server_name", &self.server_name)
            .field("owner_id", &self.owner_id)
            .field("bot_token", &self.bot_token.as_ref().map(|_| "<redacted>"))
            .field("prefix", &self.prefix)
            .field("created_at", &self.created_at)
            .finish()
    }
}
