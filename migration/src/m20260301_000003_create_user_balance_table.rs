use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserBalance::Table)
                    .if_not_exists()
                    .col(pk_auto(UserBalance::Id))
                    .col(string(UserBalance::ServerId))
                    .col(string(UserBalance::UserId))
                    .col(big_integer(UserBalance::Balance).default(0))
                    .col(big_integer(UserBalance::Xp).default(0))
                    .col(integer(UserBalance::Level).default(1))
                    .col(integer(UserBalance::Reputation).default(0))
                    .col(timestamp_with_time_zone_null(UserBalance::LastDailyReward))
                    .col(timestamp_with_time_zone(UserBalance::CreatedAt))
                    .col(timestamp_with_time_zone(UserBalance::UpdatedAt))
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_user_balance_server_user")
                            .col(UserBalance::ServerId)
                            .col(UserBalance::UserId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserBalance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserBalance {
    #[sea_orm(iden = "user_balance")]
    Table,
    Id,
    ServerId,
    UserId,
    Balance,
    Xp,
    Level,
    Reputation,
    LastDailyReward,
    CreatedAt,
    UpdatedAt,
}
