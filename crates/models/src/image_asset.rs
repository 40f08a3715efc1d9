use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::enums::{Lang, Platform};
use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "image_asset")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    /// File name under the images directory.
    pub file_name: String,
    pub size_bytes: i64,
    pub original_url: Option<String>,
    pub source_name: Option<String>,
    /// Loose back-reference to the article the image illustrates. No FK.
    pub article_id: Option<Uuid>,
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

pub fn validate_title(t: &str) -> Result<(), ModelError> {
    if t.trim().is_empty() {
        return Err(ModelError::Validation("title required".into()));
    }
    if t.len() > 255 {
        return Err(ModelError::Validation("title too long (<=255)".into()));
    }
    Ok(())
}
