//! Create `article` table.
//!
//! Blog posts with an optional cover image stored on disk.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Article::Table)
                    .if_not_exists()
                    .col(uuid(Article::Id).primary_key())
                    .col(string_len(Article::Title, 512).not_null())
                    .col(text(Article::Summary).not_null())
                    .col(text(Article::Content).not_null())
                    .col(string_len_null(Article::CoverImage, 255))
                    .col(string_len_null(Article::CoverImageUrl, 1024))
                    .col(string_len(Article::Tags, 512).not_null())
                    .col(string_len(Article::Lang, 8).not_null())
                    .col(string_len(Article::Platform, 8).not_null())
                    .col(integer(Article::DisplayOrder).not_null())
                    .col(boolean(Article::IsActive).not_null())
                    .col(timestamp_with_time_zone(Article::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Article::UpdatedAt).not_null())
                    .col(string_len(Article::CreatedBy, 128).not_null())
                    .col(string_len(Article::UpdatedBy, 128).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Article::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Article {
    Table,
    Id,
    Title,
    Summary,
    Content,
    CoverImage,
    CoverImageUrl,
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
