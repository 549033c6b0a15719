use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ModerationLog::Table)
                    .if_not_exists()
                    .col(pk_auto(ModerationLog::Id))
                    .col(string(ModerationLog::ServerId))
                    .col(string(ModerationLog::UserId))
                    .col(string(ModerationLog::Action))
                    .col(text_null(ModerationLog::Reason))
                    .col(string_null(ModerationLog::ModeratorId))
                    .col(big_integer_null(ModerationLog::Duration))
                    .col(timestamp_with_time_zone(ModerationLog::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_moderation_logs_server_created")
                    .table(ModerationLog::Table)
                    .col(ModerationLog::ServerId)
                    .col(ModerationLog::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ModerationLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ModerationLog {
    #[sea_orm(iden = "moderation_logs")]
    Table,
    Id,
    ServerId,
    UserId,
    Action,
    Reason,
    ModeratorId,
    Duration,
    CreatedAt,
}
