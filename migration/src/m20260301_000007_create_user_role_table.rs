use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserRole::Table)
                    .if_not_exists()
                    .col(pk_auto(UserRole::Id))
                    .col(string(UserRole::ServerId))
                    .col(string(UserRole::UserId))
                    .col(string(UserRole::RoleId))
                    .col(text_null(UserRole::RoleName))
                    .col(boolean(UserRole::IsTemporary).default(false))
                    .col(timestamp_with_time_zone_null(UserRole::ExpiresAt))
                    .col(timestamp_with_time_zone(UserRole::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Not unique: repeated grants of one role are kept as separate rows.
        manager
            .create_index(
                Index::create()
                    .name("idx_user_roles_server_user")
                    .table(UserRole::Table)
                    .col(UserRole::ServerId)
                    .col(UserRole::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_roles_expiry")
                    .table(UserRole::Table)
                    .col(UserRole::IsTemporary)
                    .col(UserRole::ExpiresAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserRole::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserRole {
    #[sea_orm(iden = "user_roles")]
    Table,
    Id,
    ServerId,
    UserId,
    RoleId,
    RoleName,
    IsTemporary,
    ExpiresAt,
    CreatedAt,
}
