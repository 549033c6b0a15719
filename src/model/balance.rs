//! Economy domain models: balances, XP-derived levels and leaderboard metrics.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// XP needed to advance one level.
pub const XP_PER_LEVEL: i64 = 1000;

/// Level reached with `xp` experience points: `floor(xp / 1000) + 1`.
///
/// Negative input is treated as zero; levels beyond `i32::MAX` saturate.
pub fn level_for_xp(xp: i64) -> i32 {
    i32::try_from(xp.max(0) / XP_PER_LEVEL)
        .unwrap_or(i32::MAX - 1)
        .saturating_add(1)
}

/// Balance after applying `amount` to `current`, floored at zero.
pub fn clamp_balance(current: i64, amount: i64) -> i64 {
    current.saturating_add(amount).max(0)
}

/// A member's economy state within one server.
///
/// `level` is always the value derived from `xp` by [`level_for_xp`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserBalance {
    pub id: i32,
    pub server_id: u64,
    pub user_id: u64,
    pub balance: i64,
    pub xp: i64,
    pub level: i32,
    pub reputation: i32,
    pub last_daily_reward: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserBalance {
    /// Converts an entity model to a balance domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(UserBalance)` - The converted balance
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored server or user ID is not a u64
    pub fn from_entity(entity: entity::user_balance::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            server_id: parse_u64_from_string(entity.server_id)?,
            user_id: parse_u64_from_string(entity.user_id)?,
            balance: entity.balance,
            xp: entity.xp,
            level: entity.level,
            reputation: entity.reputation,
            last_daily_reward: entity.last_daily_reward,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

/// Parameters for adding to (or withdrawing from) a member's balance.
#[derive(Debug, Clone)]
pub struct AddBalanceParam {
    pub server_id: u64,
    pub user_id: u64,
    /// Signed amount requested; recorded verbatim in the transaction log.
    pub amount: i64,
    /// Transaction type tag, e.g. `daily`, `shop`, `transfer`.
    pub kind: String,
    pub description: Option<String>,
}

/// Column a leaderboard is ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaderboardMetric {
    Balance,
    Xp,
    Reputation,
}

impl LeaderboardMetric {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Balance => "balance",
            Self::Xp => "xp",
            Self::Reputation => "reputation",
        }
    }
}

impl fmt::Display for LeaderboardMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeaderboardMetric {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "balance" => Ok(Self::Balance),
            "xp" => Ok(Self::Xp),
            "reputation" => Ok(Self::Reputation),
            other => Err(AppError::InvalidInput(format!(
                "unknown leaderboard metric '{}'",
                other
            ))),
        }
    }
}
