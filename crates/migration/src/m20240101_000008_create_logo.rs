//! Create `logo` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Logo::Table)
                    .if_not_exists()
                    .col(uuid(Logo::Id).primary_key())
                    .col(string_len(Logo::Name, 255).not_null())
                    .col(string_len(Logo::FileName, 255).not_null())
                    .col(big_integer(Logo::SizeBytes).not_null())
                    .col(string_len_null(Logo::OriginalUrl, 1024))
                    .col(string_len_null(Logo::SourceName, 255))
                    .col(string_len(Logo::Tags, 512).not_null())
                    .col(string_len(Logo::Lang, 8).not_null())
                    .col(string_len(Logo::Platform, 8).not_null())
                    .col(integer(Logo::DisplayOrder).not_null())
                    .col(boolean(Logo::IsActive).not_null())
                    .col(timestamp_with_time_zone(Logo::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Logo::UpdatedAt).not_null())
                    .col(string_len(Logo::CreatedBy, 128).not_null())
                    .col(string_len(Logo::UpdatedBy, 128).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Logo::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Logo {
    Table,
    Id,
    Name,
    FileName,
    SizeBytes,
    OriginalUrl,
    SourceName,
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
