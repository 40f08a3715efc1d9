use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::enums::{Lang, Platform};
use crate::errors::ModelError;

/// Key/value application setting. `key` is globally unique.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "app_setting")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub key: String,
    #[sea_orm(column_type = "Text")]
    pub value: String,
    pub description: Option<String>,
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

pub fn validate_key(k: &str) -> Result<(), ModelError> {
    if k.trim().is_empty() {
        return Err(ModelError::Validation("key required".into()));
    }
    if k.len() > 128 {
        return Err(ModelError::Validation("key too long (<=128)".into()));
    }
    if !k.chars().all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-') {
        return Err(ModelError::Validation(
            "key may only contain [A-Za-z0-9._-]".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_charset() {
        assert!(validate_key("ui.theme_default").is_ok());
        assert!(validate_key("bad key").is_err());
        assert!(validate_key("").is_err());
    }
}
