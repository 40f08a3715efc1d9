//! Uniqueness and lookup indexes, applied after all tables exist.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Uniqueness the services rely on for duplicate rejection
        manager
            .create_index(
                Index::create()
                    .name("uq_vocabulary_word_lang_platform")
                    .table(Vocabulary::Table)
                    .col(Vocabulary::Word)
                    .col(Vocabulary::Lang)
                    .col(Vocabulary::Platform)
                    .unique()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("uq_website_name_lang_platform")
                    .table(Website::Table)
                    .col(Website::Name)
                    .col(Website::Lang)
                    .col(Website::Platform)
                    .unique()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("uq_logo_name_lang_platform")
                    .table(Logo::Table)
                    .col(Logo::Name)
                    .col(Logo::Lang)
                    .col(Logo::Platform)
                    .unique()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("uq_app_setting_key")
                    .table(AppSetting::Table)
                    .col(AppSetting::Key)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Common list filters
        manager
            .create_index(
                Index::create()
                    .name("idx_article_active_lang")
                    .table(Article::Table)
                    .col(Article::IsActive)
                    .col(Article::Lang)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_image_asset_article")
                    .table(ImageAsset::Table)
                    .col(ImageAsset::ArticleId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_audio_track_article")
                    .table(AudioTrack::Table)
                    .col(AudioTrack::ArticleId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_video_clip_article")
                    .table(VideoClip::Table)
                    .col(VideoClip::ArticleId)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "uq_vocabulary_word_lang_platform",
            "uq_website_name_lang_platform",
            "uq_logo_name_lang_platform",
            "uq_app_setting_key",
        ] {
            manager.drop_index(Index::drop().name(name).to_owned()).await?;
        }
        manager
            .drop_index(Index::drop().name("idx_article_active_lang").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_image_asset_article").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_audio_track_article").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_video_clip_article").to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Article { Table, IsActive, Lang }

#[derive(DeriveIden)]
enum ImageAsset { Table, ArticleId }

#[derive(DeriveIden)]
enum AudioTrack { Table, ArticleId }

#[derive(DeriveIden)]
enum VideoClip { Table, ArticleId }

#[derive(DeriveIden)]
enum Vocabulary { Table, Word, Lang, Platform }

#[derive(DeriveIden)]
enum Website { Table, Name, Lang, Platform }

#[derive(DeriveIden)]
enum Logo { Table, Name, Lang, Platform }

#[derive(DeriveIden)]
enum AppSetting { Table, Key }
