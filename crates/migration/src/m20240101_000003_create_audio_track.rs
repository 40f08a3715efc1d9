//! Create `audio_track` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AudioTrack::Table)
                    .if_not_exists()
                    .col(uuid(AudioTrack::Id).primary_key())
                    .col(string_len(AudioTrack::Title, 255).not_null())
                    .col(string_len(AudioTrack::FileName, 255).not_null())
                    .col(big_integer(AudioTrack::SizeBytes).not_null())
                    .col(string_len_null(AudioTrack::OriginalUrl, 1024))
                    .col(string_len_null(AudioTrack::SourceName, 255))
                    // Loose article reference, no FK
                    .col(uuid_null(AudioTrack::ArticleId))
                    .col(string_len(AudioTrack::Tags, 512).not_null())
                    .col(string_len(AudioTrack::Lang, 8).not_null())
                    .col(string_len(AudioTrack::Platform, 8).not_null())
                    .col(integer(AudioTrack::DisplayOrder).not_null())
                    .col(boolean(AudioTrack::IsActive).not_null())
                    .col(timestamp_with_time_zone(AudioTrack::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(AudioTrack::UpdatedAt).not_null())
                    .col(string_len(AudioTrack::CreatedBy, 128).not_null())
                    .col(string_len(AudioTrack::UpdatedBy, 128).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(AudioTrack::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum AudioTrack {
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
