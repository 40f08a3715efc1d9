use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::enums::{Lang, Platform};
use crate::errors::ModelError;

/// Dictionary entry with optional pronunciation media.
/// (word, lang, platform) is unique.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vocabulary")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub word: String,
    pub meaning: String,
    /// Inflected forms, comma-separated ("go,went,gone").
    pub tenses: Option<String>,
    pub phonetic: Option<String>,
    /// Pronunciation file under the audio directory.
    pub audio_file: Option<String>,
    /// Illustration under the images directory.
    pub image_file: Option<String>,
    pub tags: String,
    pub lang: Lang,
    pub platform: Platform,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub created_by: String,
    pub updated_by: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_word(w: &str) -> Result<(), ModelError> {
    if w.trim().is_empty() {
        return Err(ModelError::Validation("word required".into()));
    }
    if w.len() > 128 {
        return Err(ModelError::Validation("word too long (<=128)".into()));
    }
    Ok(())
}

pub fn validate_meaning(m: &str) -> Result<(), ModelError> {
    if m.trim().is_empty() {
        return Err(ModelError::Validation("meaning required".into()));
    }
    Ok(())
}
