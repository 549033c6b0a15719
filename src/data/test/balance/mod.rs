use crate::{
    data::balance::UserBalanceRepository, error::AppError, model::balance::LeaderboardMetric,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find;
mod leaderboard;
mod set_balance;
mod set_xp;
