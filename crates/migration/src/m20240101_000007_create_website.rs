//! Create `website` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Website::Table)
                    .if_not_exists()
                    .col(uuid(Website::Id).primary_key())
                    .col(string_len(Website::Name, 255).not_null())
                    .col(string_len(Website::Url, 1024).not_null())
                    .col(text_null(Website::Description))
                    .col(string_len_null(Website::LogoFile, 255))
                    .col(string_len(Website::Tags, 512).not_null())
                    .col(string_len(Website::Lang, 8).not_null())
                    .col(string_len(Website::Platform, 8).not_null())
                    .col(integer(Website::DisplayOrder).not_null())
                    .col(boolean(Website::IsActive).not_null())
                    .col(timestamp_with_time_zone(Website::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Website::UpdatedAt).not_null())
                    .col(string_len(Website::CreatedBy, 128).not_null())
                    .col(string_len(Website::UpdatedBy, 128).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Website::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Website {
    Table,
    Id,
    Name,
    Url,
    Description,
    LogoFile,
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
