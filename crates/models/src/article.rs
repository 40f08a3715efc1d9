use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::enums::{Lang, Platform};
use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "article")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub summary: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    /// Stored cover file name under the covers directory, if any.
    pub cover_image: Option<String>,
    /// Remote URL the cover was fetched from, kept for provenance.
    pub cover_image_url: Option<String>,
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
    if t.len() > 512 {
        return Err(ModelError::Validation("title too long (<=512)".into()));
    }
    Ok(())
}

pub fn validate_content(c: &str) -> Result<(), ModelError> {
    if c.trim().is_empty() {
        return Err(ModelError::Validation("content required".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_rules() {
        assert!(validate_title("Hello").is_ok());
        assert!(validate_title("  ").is_err());
        assert!(validate_title(&"x".repeat(600)).is_err());
    }
}
