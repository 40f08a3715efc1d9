//! Create `app_setting` table. `key` uniqueness is added in the indexes
//! migration.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppSetting::Table)
                    .if_not_exists()
                    .col(uuid(AppSetting::Id).primary_key())
                    .col(string_len(AppSetting::Key, 128).not_null())
                    .col(text(AppSetting::Value).not_null())
                    .col(text_null(AppSetting::Description))
                    .col(string_len(AppSetting::Tags, 512).not_null())
                    .col(string_len(AppSetting::Lang, 8).not_null())
                    .col(string_len(AppSetting::Platform, 8).not_null())
                    .col(integer(AppSetting::DisplayOrder).not_null())
                    .col(boolean(AppSetting::IsActive).not_null())
                    .col(timestamp_with_time_zone(AppSetting::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(AppSetting::UpdatedAt).not_null())
                    .col(string_len(AppSetting::CreatedBy, 128).not_null())
                    .col(string_len(AppSetting::UpdatedBy, 128).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(AppSetting::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum AppSetting {
    Table,
    Id,
    Key,
    Value,
    Description,
    Tags,
    Lang,
    Platform,
    DisplayOrder,
    IsActive,
    CreatedAt,
    UpdatedAt,
    CreatedBy,
    UpdatedBy,
}
