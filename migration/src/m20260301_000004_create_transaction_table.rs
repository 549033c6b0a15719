use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Transaction::Table)
                    .if_not_exists()
                    .col(pk_auto(Transaction::Id))
                    .col(string(Transaction::ServerId))
                    .col(string(Transaction::UserId))
                    .col(big_integer(Transaction::Amount))
                    .col(string(Transaction::Type))
                    .col(text_null(Transaction::Description))
                    .col(timestamp_with_time_zone(Transaction::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_transactions_server_user")
                    .table(Transaction::Table)
                    .col(Transaction::ServerId)
                    .col(Transaction::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Transaction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Transaction {
    #[sea_orm(iden = "transactions")]
    Table,
    Id,
    ServerId,
    UserId,
    Amount,
    Type,
    Description,
    CreatedAt,
}
