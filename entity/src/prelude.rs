pub use super::discord_server::Entity as DiscordServer;
pub use super::feature_setting::Entity as FeatureSetting;
pub use super::message_log::Entity as MessageLog;
pub use super::moderation_log::Entity as ModerationLog;
pub use super::transaction::Entity as Transaction;
pub use super::user::Entity as User;
pub use super::user_balance::Entity as UserBalance;
pub use super::user_role::Entity as UserRole;
pub use super::user_warning::Entity as UserWarning;
