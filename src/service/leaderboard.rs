//! Leaderboard service ranking members of a server.

use crate::{
    data::balance::UserBalanceRepository,
    error::AppError,
    model::balance::{LeaderboardMetric, UserBalance},
    store::Store,
    util::validate::require_id,
};

/// Number of members returned by [`LeaderboardService::get_leaderboard`] by default.
pub const DEFAULT_LEADERBOARD_LIMIT: u64 = 10;

/// Service providing read-only rankings over balance rows.
pub struct LeaderboardService<'a> {
    store: &'a Store,
}

impl<'a> LeaderboardService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Gets the top members of a server ranked by `metric`, highest first.
    ///
    /// Ties are ordered by ascending numeric user ID.
    ///
    /// # Arguments
    /// - `server_id` - Discord server ID (required)
    /// - `metric` - Balance, XP or reputation
    /// - `limit` - Maximum members returned, [`DEFAULT_LEADERBOARD_LIMIT`] if `None`
    ///
    /// # Returns
    /// - `Ok(Vec<UserBalance>)` - Ranked members, empty if the store is unavailable or failed
    /// - `Err(AppError::InvalidInput)` - The server ID is missing
    pub async fn get_leaderboard(
        &self,
        server_id: u64,
        metric: LeaderboardMetric,
        limit: Option<u64>,
    ) -> Result<Vec<UserBalance>, AppError> {
        require_id("server_id", server_id)?;

        let Some(db) = self.store.connection_for("get leaderboard").await else {
            return Ok(Vec::new());
        };

        let limit = limit.unwrap_or(DEFAULT_LEADERBOARD_LIMIT);
        match UserBalanceRepository::new(db)
            .leaderboard(server_id, metric, limit)
            .await
        {
            Ok(ranked) => Ok(ranked),
            Err(e) => {
                tracing::error!(server_id, %metric, "[Database] Failed to get leaderboard: {}", e);
                Ok(Vec::new())
            }
        }
    }
}
