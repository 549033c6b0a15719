use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DiscordServer::Table)
                    .if_not_exists()
                    .col(pk_auto(DiscordServer::Id))
                    .col(string_uniq(DiscordServer::ServerId))
                    .col(text_null(DiscordServer::ServerName))
                    .col(string_null(DiscordServer::OwnerId))
                    .col(text_null(DiscordServer::BotToken))
                    .col(string(DiscordServer::Prefix).default("!"))
                    .col(timestamp_with_time_zone(DiscordServer::CreatedAt))
                    .col(timestamp_with_time_zone(DiscordServer::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DiscordServer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DiscordServer {
    #[sea_orm(iden = "discord_servers")]
    Table,
    Id,
    ServerId,
    ServerName,
    OwnerId,
    BotToken,
    Prefix,
    CreatedAt,
    UpdatedAt,
}
