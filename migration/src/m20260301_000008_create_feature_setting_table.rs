use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FeatureSetting::Table)
                    .if_not_exists()
                    .col(pk_auto(FeatureSetting::Id))
                    .col(string(FeatureSetting::ServerId))
                    .col(string(FeatureSetting::FeatureName))
                    .col(boolean(FeatureSetting::IsEnabled).default(true))
                    .col(text_null(FeatureSetting::Settings))
                    .col(timestamp_with_time_zone(FeatureSetting::CreatedAt))
                    .col(timestamp_with_time_zone(FeatureSetting::UpdatedAt))
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_feature_settings_server_feature")
                            .col(FeatureSetting::ServerId)
                            .col(FeatureSetting::FeatureName),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FeatureSetting::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FeatureSetting {
    #[sea_orm(iden = "feature_settings")]
    Table,
    Id,
    ServerId,
    FeatureName,
    IsEnabled,
    Settings,
    CreatedAt,
    UpdatedAt,
}
