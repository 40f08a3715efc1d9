use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::enums::{Lang, Platform, QuestionType};
use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "quiz_question")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub question_type: QuestionType,
    #[sea_orm(column_type = "Text")]
    pub question: String,
    #[sea_orm(column_type = "Text")]
    pub answer: String,
    /// JSON array of choices. Empty array for non-MCQ kinds.
    pub options: Json,
    /// 1 (easiest) through 5 (hardest).
    pub difficulty_level: i32,
    pub success_count: i64,
    pub fail_count: i64,
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

pub fn validate_question(q: &str) -> Result<(), ModelError> {
    if q.trim().is_empty() {
        return Err(ModelError::Validation("question required".into()));
    }
    Ok(())
}

pub fn validate_answer(a: &str) -> Result<(), ModelError> {
    if a.trim().is_empty() {
        return Err(ModelError::Validation("answer required".into()));
    }
    Ok(())
}

pub fn validate_difficulty(d: i32) -> Result<(), ModelError> {
    if !(1..=5).contains(&d) {
        return Err(ModelError::Validation("difficulty_level must be 1..=5".into()));
    }
    Ok(())
}

/// MCQ needs at least two choices and the answer must be one of them.
/// Other kinds must not carry options.
pub fn validate_options(
    kind: QuestionType,
    options: &serde_json::Value,
    answer: &str,
) -> Result<(), ModelError> {
    let arr = options
        .as_array()
        .ok_or_else(|| ModelError::Validation("options must be a JSON array".into()))?;
    match kind {
        QuestionType::Mcq => {
            if arr.len() < 2 {
                return Err(ModelError::Validation("mcq needs at least 2 options".into()));
            }
            let hit = arr.iter().any(|v| v.as_str() == Some(answer));
            if !hit {
                return Err(ModelError::Validation("answer must be one of the options".into()));
            }
        }
        _ => {
            if !arr.is_empty() {
                return Err(ModelError::Validation(
                    "options are only valid for mcq questions".into(),
                ));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn difficulty_bounds() {
        assert!(validate_difficulty(1).is_ok());
        assert!(validate_difficulty(5).is_ok());
        assert!(validate_difficulty(0).is_err());
        assert!(validate_difficulty(6).is_err());
    }

    #[test]
    fn mcq_options_must_contain_answer() {
        let opts = json!(["red", "green", "blue"]);
        assert!(validate_options(QuestionType::Mcq, &opts, "green").is_ok());
        assert!(validate_options(QuestionType::Mcq, &opts, "purple").is_err());
        assert!(validate_options(QuestionType::Mcq, &json!(["only"]), "only").is_err());
    }

    #[test]
    fn non_mcq_rejects_options() {
        assert!(validate_options(QuestionType::Saq, &json!([]), "x").is_ok());
        assert!(validate_options(QuestionType::TrueFalse, &json!(["true"]), "true").is_err());
    }
}
