//! String-backed enums shared across the content entities.

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;
use serde::{Deserialize, Serialize};

/// Content language. Stored as a short lowercase code.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    #[sea_orm(string_value = "en")]
    En,
    #[sea_orm(string_value = "zh")]
    Zh,
    #[sea_orm(string_value = "vi")]
    Vi,
    #[sea_orm(string_value = "es")]
    Es,
    #[sea_orm(string_value = "fr")]
    Fr,
}

/// Platform variant. The catalog is served to two structurally identical
/// frontends; rows carry a discriminator instead of duplicating tables.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    #[sea_orm(string_value = "main")]
    Main,
    #[sea_orm(string_value = "ru")]
    Ru,
}

/// Quiz question kinds.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    #[sea_orm(string_value = "mcq")]
    Mcq,
    #[sea_orm(string_value = "saq")]
    Saq,
    #[sea_orm(string_value = "true_false")]
    TrueFalse,
    #[sea_orm(string_value = "fill_blank")]
    FillBlank,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lang_serde_round_trip() {
        let s = serde_json::to_string(&Lang::Zh).unwrap();
        assert_eq!(s, "\"zh\"");
        let back: Lang = serde_json::from_str(&s).unwrap();
        assert_eq!(back, Lang::Zh);
    }

    #[test]
    fn question_type_uses_snake_case() {
        assert_eq!(
            serde_json::to_string(&QuestionType::TrueFalse).unwrap(),
            "\"true_false\""
        );
        assert_eq!(
            serde_json::to_string(&QuestionType::FillBlank).unwrap(),
            "\"fill_blank\""
        );
    }
}
