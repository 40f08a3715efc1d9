//! Create `video_clip` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VideoClip::Table)
                    .if_not_exists()
                    .col(uuid(VideoClip::Id).primary_key())
                    .col(string_len(VideoClip::Title, 255).not_null())
                    .col(string_len(VideoClip::FileName, 255).not_null())
                    .col(big_integer(VideoClip::SizeBytes).not_null())
                    .col(string_len_null(VideoClip::OriginalUrl, 1024))
                    .col(string_len_null(VideoClip::SourceName, 255))
                    // Loose article reference, no FK
                    .col(uuid_null(VideoClip::ArticleId))
                    .col(string_len(VideoClip::Tags, 512).not_null())
                    .col(string_len(VideoClip::Lang, 8).not_null())
                    .col(string_len(VideoClip::Platform, 8).not_null())
                    .col(integer(VideoClip::DisplayOrder).not_null())
                    .col(boolean(VideoClip::IsActive).not_null())
                    .col(timestamp_with_time_zone(VideoClip::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(VideoClip::UpdatedAt).not_null())
                    .col(string_len(VideoClip::CreatedBy, 128).not_null())
                    .col(string_len(VideoClip::UpdatedBy, 128).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(VideoClip::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum VideoClip {
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
