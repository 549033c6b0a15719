//! Fixture for user balance test data.

use chrono::Utc;
use entity::user_balance;

/// Default test server Discord ID.
pub const DEFAULT_SERVER_ID: &str = "100000000000000001";

/// Default test user Discord ID.
pub const DEFAULT_USER_ID: &str = "200000000000000001";

/// Creates a zeroed user balance entity model, as the economy creates it on first read.
///
/// # Returns
/// - `user_balance::Model` - In-memory entity with balance 0, xp 0, level 1
pub fn entity() -> user_balance::Model {
    entity_builder().build()
}

/// Creates a customizable user balance entity builder.
///
/// # Example
/// ```rust,ignore
/// let entity = fixture::user_balance::entity_builder()
///     .user_id("300000000000000001")
///     .xp(2500)
///     .build();
/// assert_eq!(entity.level, 3);
/// ```
pub fn entity_builder() -> UserBalanceEntityBuilder {
    UserBalanceEntityBuilder::default()
}

/// Builder for user balance entity models.
///
/// `level` is always derived from `xp` at build time.
pub struct UserBalanceEntityBuilder {
    id: i32,
    server_id: String,
    user_id: String,
    balance: i64,
    xp: i64,
    reputation: i32,
}

impl Default for UserBalanceEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            server_id: DEFAULT_SERVER_ID.to_string(),
            user_id: DEFAULT_USER_ID.to_string(),
            balance: 0,
            xp: 0,
            reputation: 0,
        }
    }
}

impl UserBalanceEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn server_id(mut self, server_id: impl Into<String>) -> Self {
        self.server_id = server_id.into();
        self
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn balance(mut self, balance: i64) -> Self {
        self.balance = balance;
        self
    }

    pub fn xp(mut self, xp: i64) -> Self {
        self.xp = xp;
        self
    }

    pub fn reputation(mut self, reputation: i32) -> Self {
        self.reputation = reputation;
        self
    }

    /// Builds the entity model.
    pub fn build(self) -> user_balance::Model {
        let now = Utc::now();
        user_balance::Model {
            id: self.id,
            server_id: self.server_id,
            user_id: self.user_id,
            balance: self.balance,
            xp: self.xp,
            level: (self.xp / 1000) as i32 + 1,
            reputation: self.reputation,
            last_daily_reward: None,
            created_at: now,
            updated_at: now,
        }
    }
}
