pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_discord_server_table;
mod m20260301_000003_create_user_balance_table;
mod m20260301_000004_create_transaction_table;
mod m20260301_000005_create_moderation_log_table;
mod m20260301_000006_create_user_warning_table;
mod m20260301_000007_create_user_role_table;
mod m20260301_000008_create_feature_setting_table;
mod m20260301_000009_create_message_log_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_discord_server_table::Migration),
            Box::new(m20260301_000003_create_user_balance_table::Migration),
            Box::new(m20260301_000004_create_transaction_table::Migration),
            Box::new(m20260301_000005_create_moderation_log_table::Migration),
            Box::new(m20260301_000006_create_user_warning_table::Migration),
            Box::new(m20260301_000007_create_user_role_table::Migration),
            Box::new(m20260301_000008_create_feature_setting_table::Migration),
            Box::new(m20260301_000009_create_message_log_table::Migration),
        ]
    }
}
