//! Create `quiz_question` table.
//!
//! Options live in a JSONB column; attempt counters are plain integers
//! bumped by the service.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(QuizQuestion::Table)
                    .if_not_exists()
                    .col(uuid(QuizQuestion::Id).primary_key())
                    .col(string_len(QuizQuestion::QuestionType, 16).not_null())
                    .col(text(QuizQuestion::Question).not_null())
                    .col(text(QuizQuestion::Answer).not_null())
                    .col(json_binary(QuizQuestion::Options).not_null())
                    .col(integer(QuizQuestion::DifficultyLevel).not_null())
                    .col(big_integer(QuizQuestion::SuccessCount).not_null())
                    .col(big_integer(QuizQuestion::FailCount).not_null())
                    .col(string_len(QuizQuestion::Tags, 512).not_null())
                    .col(string_len(QuizQuestion::Lang, 8).not_null())
                    .col(string_len(QuizQuestion::Platform, 8).not_null())
                    .col(integer(QuizQuestion::DisplayOrder).not_null())
                    .col(boolean(QuizQuestion::IsActive).not_null())
                    .col(timestamp_with_time_zone(QuizQuestion::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(QuizQuestion::UpdatedAt).not_null())
                    .col(string_len(QuizQuestion::CreatedBy, 128).not_null())
                    .col(string_len(QuizQuestion::UpdatedBy, 128).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(QuizQuestion::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum QuizQuestion {
    Table,
    Id,
    QuestionType,
    Question,
    Answer,
    Options,
    DifficultyLevel,
    SuccessCount,
    FailCount,
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
