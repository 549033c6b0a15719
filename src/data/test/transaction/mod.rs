use crate::{
    data::transaction::TransactionRepository, error::AppError, model::balance::AddBalanceParam,
};
use test_utils::builder::TestBuilder;

mod create;
mod list;

fn param(amount: i64, kind: &str) -> AddBalanceParam {
    AddBalanceParam {
        server_id: 1,
        user_id: 2,
        amount,
        kind: kind.to_string(),
        description: None,
    }
}
