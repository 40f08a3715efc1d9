//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_article;
mod m20240101_000002_create_image_asset;
mod m20240101_000003_create_audio_track;
mod m20240101_000004_create_video_clip;
mod m20240101_000005_create_vocabulary;
mod m20240101_000006_create_quiz_question;
mod m20240101_000007_create_website;
mod m20240101_000008_create_logo;
mod m20240101_000009_create_app_setting;
mod m20240101_000010_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_article::Migration),
            Box::new(m20240101_000002_create_image_asset::Migration),
            Box::new(m20240101_000003_create_audio_track::Migration),
            Box::new(m20240101_000004_create_video_clip::Migration),
            Box::new(m20240101_000005_create_vocabulary::Migration),
            Box::new(m20240101_000006_create_quiz_question::Migration),
            Box::new(m20240101_000007_create_website::Migration),
            Box::new(m20240101_000008_create_logo::Migration),
            Box::new(m20240101_000009_create_app_setting::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000010_add_indexes::Migration),
        ]
    }
}
