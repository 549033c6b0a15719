use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// One immutable entry of the economy audit trail.
///
/// `amount` is the amount that was requested, which for clamped withdrawals is larger
/// in magnitude than the change actually applied to the balance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub id: i32,
    pub server_id: u64,
    pub user_id: u64,
    pub amount: i64,
    pub kind: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn from_entity(entity: entity::transaction::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            server_id: parse_u64_from_string(entity.server_id)?,
            user_id: parse_u64_from_string(entity.user_id)?,
            amount: entity.amount,
            kind: entity.kind,
            description: entity.description,
            created_at: entity.created_at,
        })
    }
}
