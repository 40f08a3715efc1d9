//! Create `image_asset` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ImageAsset::Table)
                    .if_not_exists()
                    .col(uuid(ImageAsset::Id).primary_key())
                    .col(string_len(ImageAsset::Title, 255).not_null())
                    .col(string_len(ImageAsset::FileName, 255).not_null())
                    .col(big_integer(ImageAsset::SizeBytes).not_null())
                    .col(string_len_null(ImageAsset::OriginalUrl, 1024))
                    .col(string_len_null(ImageAsset::SourceName, 255))
                    // Loose article reference, no FK
                    .col(uuid_null(ImageAsset::ArticleId))
                    .col(string_len(ImageAsset::Tags, 512).not_null())
                    .col(string_len(ImageAsset::Lang, 8).not_null())
                    .col(string_len(ImageAsset::Platform, 8).not_null())
                    .col(integer(ImageAsset::DisplayOrder).not_null())
                    .col(boolean(ImageAsset::IsActive).not_null())
                    .col(timestamp_with_time_zone(ImageAsset::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(ImageAsset::UpdatedAt).not_null())
                    .col(string_len(ImageAsset::CreatedBy, 128).not_null())
                    .col(string_len(ImageAsset::UpdatedBy, 128).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ImageAsset::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ImageAsset {
    Table,
    Id,
    Title,
    FileName,
    SizeBytes,
    OriginalUrl,
    SourceName,
    ArticleId,
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
