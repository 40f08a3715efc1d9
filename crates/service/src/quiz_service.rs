//! Quiz question CRUD and attempt bookkeeping.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use models::enums::{Lang, Platform, QuestionType};
use models::quiz_question;

use crate::errors::ServiceError;
use crate::pagination::{Page, Pagination};
use crate::ListFilter;

pub struct CreateQuizQuestion {
    pub question_type: QuestionType,
    pub question: String,
    pub answer: String,
    /// JSON array of choices; defaults to `[]`.
    pub options: Option<serde_json::Value>,
    pub difficulty_level: Option<i32>,
    pub tags: Option<String>,
    pub lang: Lang,
    pub platform: Platform,
    pub display_order: Option<i32>,
}

#[derive(Default)]
pub struct UpdateQuizQuestion {
    pub question_type: Option<QuestionType>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub options: Option<serde_json::Value>,
    pub difficulty_level: Option<i32>,
    pub tags: Option<String>,
    pub lang: Option<Lang>,
    pub platform: Option<Platform>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

pub async fn create_question(
    db: &DatabaseConnection,
    input: CreateQuizQuestion,
    user_id: &str,
) -> Result<quiz_question::Model, ServiceError> {
    quiz_question::validate_question(&input.question)?;
    quiz_question::validate_answer(&input.answer)?;
    let difficulty = input.difficulty_level.unwrap_or(1);
    quiz_question::validate_difficulty(difficulty)?;
    let options = input.options.unwrap_or_else(|| serde_json::json!([]));
    quiz_question::validate_options(input.question_type, &options, &input.answer)?;

    let now = Utc::now().into();
    let am = quiz_question::ActiveModel {
        id: Set(Uuid::new_v4()),
        question_type: Set(input.question_type),
        question: Set(input.question),
        answer: Set(input.answer),
        options: Set(options),
        difficulty_level: Set(difficulty),
        success_count: Set(0),
        fail_count: Set(0),
        tags: Set(input.tags.unwrap_or_default()),
        lang: Set(input.lang),
        platform: Set(input.platform),
        display_order: Set(input.display_order.unwrap_or(0)),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        created_by: Set(user_id.to_string()),
        updated_by: Set(user_id.to_string()),
    };
    am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn get_question(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<quiz_question::Model>, ServiceError> {
    quiz_question::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn update_question(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateQuizQuestion,
    user_id: &str,
) -> Result<quiz_question::Model, ServiceError> {
    let found = quiz_question::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("quiz question"))?;

    // Options consistency is checked against the effective post-patch state
    let kind = input.question_type.unwrap_or(found.question_type);
    let answer = input.answer.clone().unwrap_or_else(|| found.answer.clone());
    let options = input.options.clone().unwrap_or_else(|| found.options.clone());
    quiz_question::validate_options(kind, &options, &answer)?;

    let mut am: quiz_question::ActiveModel = found.into();
    if let Some(kind) = input.question_type {
        am.question_type = Set(kind);
    }
    if let Some(question) = input.question {
        quiz_question::validate_question(&question)?;
        am.question = Set(question);
    }
    if let Some(answer) = input.answer {
        quiz_question::validate_answer(&answer)?;
        am.answer = Set(answer);
    }
    if let Some(options) = input.options {
        am.options = Set(options);
    }
    if let Some(difficulty) = input.difficulty_level {
        quiz_question::validate_difficulty(difficulty)?;
        am.difficulty_level = Set(difficulty);
    }
    if let Some(tags) = input.tags {
        am.tags = Set(tags);
    }
    if let Some(lang) = input.lang {
        am.lang = Set(lang);
    }
    if let Some(platform) = input.platform {
        am.platform = Set(platform);
    }
    if let Some(order) = input.display_order {
        am.display_order = Set(order);
    }
    if let Some(active) = input.is_active {
        am.is_active = Set(active);
    }
    am.updated_at = Set(Utc::now().into());
    am.updated_by = Set(user_id.to_string());
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn list_questions(
    db: &DatabaseConnection,
    filter: &ListFilter,
    question_type: Option<QuestionType>,
    page: Pagination,
) -> Result<Page<quiz_question::Model>, ServiceError> {
    let mut query = quiz_question::Entity::find();
    if !filter.include_inactive {
        query = query.filter(quiz_question::Column::IsActive.eq(true));
    }
    if let Some(kind) = question_type {
        query = query.filter(quiz_question::Column::QuestionType.eq(kind));
    }
    if let Some(lang) = filter.lang {
        query = query.filter(quiz_question::Column::Lang.eq(lang));
    }
    if let Some(platform) = filter.platform {
        query = query.filter(quiz_question::Column::Platform.eq(platform));
    }
    if let Some(tag) = &filter.tag {
        query = query.filter(quiz_question::Column::Tags.contains(tag));
    }
    if let Some(q) = &filter.q {
        query = query.filter(quiz_question::Column::Question.contains(q));
    }
    let query = query
        .order_by_asc(quiz_question::Column::DisplayOrder)
        .order_by_desc(quiz_question::Column::UpdatedAt);

    let (page_idx, per_page) = page.normalize();
    let paginator = query.paginate(db, per_page);
    let total = paginator
        .num_items()
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let items = paginator
        .fetch_page(page_idx)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(Page::new(items, total, page))
}

/// Record one answer attempt, bumping exactly one counter.
pub async fn record_attempt(
    db: &DatabaseConnection,
    id: Uuid,
    success: bool,
) -> Result<quiz_question::Model, ServiceError> {
    let found = quiz_question::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("quiz question"))?;
    let (succ, fail) = (found.success_count, found.fail_count);
    let mut am: quiz_question::ActiveModel = found.into();
    if success {
        am.success_count = Set(succ + 1);
    } else {
        am.fail_count = Set(fail + 1);
    }
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn soft_delete_question(
    db: &DatabaseConnection,
    id: Uuid,
    user_id: &str,
) -> Result<(), ServiceError> {
    let mut am: quiz_question::ActiveModel = quiz_question::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("quiz question"))?
        .into();
    am.is_active = Set(false);
    am.updated_at = Set(Utc::now().into());
    am.updated_by = Set(user_id.to_string());
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(())
}

pub async fn delete_question_permanently(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<(), ServiceError> {
    let res = quiz_question::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("quiz question"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use serde_json::json;

    #[tokio::test]
    async fn attempt_counters_move_independently() {
        let db = match get_db().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return;
            }
        };

        let created = create_question(
            &db,
            CreateQuizQuestion {
                question_type: QuestionType::Mcq,
                question: "Pick the color of the sky".into(),
                answer: "blue".into(),
                options: Some(json!(["red", "blue", "green"])),
                difficulty_level: Some(2),
                tags: None,
                lang: Lang::En,
                platform: Platform::Main,
                display_order: None,
            },
            "tester",
        )
        .await
        .expect("create");
        assert_eq!(created.success_count, 0);

        let after_win = record_attempt(&db, created.id, true).await.expect("win");
        assert_eq!(after_win.success_count, 1);
        assert_eq!(after_win.fail_count, 0);

        let after_loss = record_attempt(&db, created.id, false).await.expect("loss");
        assert_eq!(after_loss.success_count, 1);
        assert_eq!(after_loss.fail_count, 1);

        delete_question_permanently(&db, created.id).await.expect("cleanup");
    }

    #[tokio::test]
    async fn mcq_create_rejects_answer_outside_options() {
        let db = match get_db().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return;
            }
        };
        let res = create_question(
            &db,
            CreateQuizQuestion {
                question_type: QuestionType::Mcq,
                question: "q".into(),
                answer: "missing".into(),
                options: Some(json!(["a", "b"])),
                difficulty_level: None,
                tags: None,
                lang: Lang::En,
                platform: Platform::Main,
                display_order: None,
            },
            "tester",
        )
        .await;
        assert!(matches!(res, Err(ServiceError::Model(_))));
    }
}
