//! Create `vocabulary` table. Uniqueness on (word, lang, platform) is
//! added in the indexes migration.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vocabulary::Table)
                    .if_not_exists()
                    .col(uuid(Vocabulary::Id).primary_key())
                    .col(string_len(Vocabulary::Word, 128).not_null())
                    .col(text(Vocabulary::Meaning).not_null())
                    .col(string_len_null(Vocabulary::Tenses, 512))
                    .col(string_len_null(Vocabulary::Phonetic, 255))
                    .col(string_len_null(Vocabulary::AudioFile, 255))
                    .col(string_len_null(Vocabulary::ImageFile, 255))
                    .col(string_len(Vocabulary::Tags, 512).not_null())
                    .col(string_len(Vocabulary::Lang, 8).not_null())
                    .col(string_len(Vocabulary::Platform, 8).not_null())
                    .col(integer(Vocabulary::DisplayOrder).not_null())
                    .col(boolean(Vocabulary::IsActive).not_null())
                    .col(timestamp_with_time_zone(Vocabulary::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Vocabulary::UpdatedAt).not_null())
                    .col(string_len(Vocabulary::CreatedBy, 128).not_null())
                    .col(string_len(Vocabulary::UpdatedBy, 128).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Vocabulary::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Vocabulary {
    Table,
    Id,
    Word,
    Meaning,
    Tenses,
    Phonetic,
    AudioFile,
    ImageFile,
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
