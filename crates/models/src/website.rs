use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::enums::{Lang, Platform};
use crate::errors::ModelError;

/// External learning resource listed in the catalog.
/// (name, lang, platform) is unique.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "website")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    /// File name under the logos directory.
    pub logo_file: Option<String>,
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

pub fn validate_name(n: &str) -> Result<(), ModelError> {
    if n.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    if n.len() > 255 {
        return Err(ModelError::Validation("name too long (<=255)".into()));
    }
    Ok(())
}

pub fn validate_url(u: &str) -> Result<(), ModelError> {
    if !(u.starts_with("http://") || u.starts_with("https://")) {
        return Err(ModelError::Validation("url must start with http(s)".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_scheme_enforced() {
        assert!(validate_url("https://example.com").is_ok());
        assert!(validate_url("ftp://example.com").is_err());
    }
}
