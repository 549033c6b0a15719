use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MessageLog::Table)
                    .if_not_exists()
                    .col(pk_auto(MessageLog::Id))
                    .col(string(MessageLog::ServerId))
                    .col(string(MessageLog::MessageId))
                    .col(string(MessageLog::UserId))
                    .col(string(MessageLog::ChannelId))
                    .col(text_null(MessageLog::Content))
                    .col(string(MessageLog::Action))
                    .col(timestamp_with_time_zone(MessageLog::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_message_logs_server_created")
                    .table(MessageLog::Table)
                    .col(MessageLog::ServerId)
                    .col(MessageLog::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MessageLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MessageLog {
    #[sea_orm(iden = "message_logs")]
    Table,
    Id,
    ServerId,
    MessageId,
    UserId,
    ChannelId,
    Content,
    Action,
    CreatedAt,
}
