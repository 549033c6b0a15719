use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserWarning::Table)
                    .if_not_exists()
                    .col(pk_auto(UserWarning::Id))
                    .col(string(UserWarning::ServerId))
                    .col(string(UserWarning::UserId))
                    .col(integer(UserWarning::WarnCount).default(0))
                    .col(timestamp_with_time_zone(UserWarning::CreatedAt))
                    .col(timestamp_with_time_zone(UserWarning::UpdatedAt))
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_user_warnings_server_user")
                            .col(UserWarning::ServerId)
                            .col(UserWarning::UserId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserWarning::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserWarning {
    #[sea_orm(iden = "user_warnings")]
    Table,
    Id,
    ServerId,
    UserId,
    WarnCount,
    CreatedAt,
    UpdatedAt,
}
