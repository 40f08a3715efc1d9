//! Quiz question endpoints, including per-question attempt counters.

use axum::extract::{Path, Query, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use models::enums::{Lang, Platform, QuestionType};
use models::quiz_question;
use service::quiz_service::{self, CreateQuizQuestion, UpdateQuizQuestion};

use crate::errors::ApiError;
use crate::extract::CurrentUser;
use crate::routes::{ListQuery, PageResponse, ServerState};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(get_one).put(update).delete(remove))
        .route("/:id/permanent", delete(remove_permanently))
        .route("/:id/attempts", post(record_attempt))
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct TypeQuery {
    #[param(value_type = Option<String>)]
    pub question_type: Option<QuestionType>,
}

#[derive(Debug, Deserialize)]
pub struct CreateQuestionInput {
    pub question_type: QuestionType,
    pub question: String,
    pub answer: String,
    pub options: Option<serde_json::Value>,
    pub difficulty_level: Option<i32>,
    pub tags: Option<String>,
    #[serde(default)]
    pub lang: Lang,
    #[serde(default)]
    pub platform: Platform,
    pub display_order: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateQuestionInput {
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

#[derive(Debug, Deserialize)]
pub struct AttemptInput {
    pub success: bool,
}

#[utoipa::path(
    get, path = "/v1/quiz-questions", tag = "quiz",
    params(ListQuery, TypeQuery),
    responses((status = 200, description = "List OK"))
)]
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<ListQuery>,
    Query(kind): Query<TypeQuery>,
) -> Result<Json<PageResponse<quiz_question::Model>>, ApiError> {
    let page =
        quiz_service::list_questions(&state.db, &q.filter(), kind.question_type, q.page()).await?;
    Ok(Json(page.into()))
}

#[utoipa::path(
    post, path = "/v1/quiz-questions", tag = "quiz",
    request_body = crate::openapi::CreateQuestionDoc,
    responses((status = 200, description = "Created"), (status = 400, description = "Validation Error"))
)]
pub async fn create(
    State(state): State<ServerState>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<CreateQuestionInput>,
) -> Result<Json<quiz_question::Model>, ApiError> {
    let created = quiz_service::create_question(
        &state.db,
        CreateQuizQuestion {
            question_type: input.question_type,
            question: input.question,
            answer: input.answer,
            options: input.options,
            difficulty_level: input.difficulty_level,
            tags: input.tags,
            lang: input.lang,
            platform: input.platform,
            display_order: input.display_order,
        },
        &user,
    )
    .await?;
    info!(id = %created.id, "quiz question created");
    Ok(Json(created))
}

#[utoipa::path(
    get, path = "/v1/quiz-questions/{id}", tag = "quiz",
    params(("id" = Uuid, Path, description = "Question id")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found"))
)]
pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<quiz_question::Model>, ApiError> {
    quiz_service::get_question(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::from(service::errors::ServiceError::not_found("quiz question")))
}

#[utoipa::path(
    put, path = "/v1/quiz-questions/{id}", tag = "quiz",
    params(("id" = Uuid, Path, description = "Question id")),
    responses((status = 200, description = "Updated"), (status = 404, description = "Not Found"))
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<UpdateQuestionInput>,
) -> Result<Json<quiz_question::Model>, ApiError> {
    let updated = quiz_service::update_question(
        &state.db,
        id,
        UpdateQuizQuestion {
            question_type: input.question_type,
            question: input.question,
            answer: input.answer,
            options: input.options,
            difficulty_level: input.difficulty_level,
            tags: input.tags,
            lang: input.lang,
            platform: input.platform,
            display_order: input.display_order,
            is_active: input.is_active,
        },
        &user,
    )
    .await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/v1/quiz-questions/{id}", tag = "quiz",
    params(("id" = Uuid, Path, description = "Question id")),
    responses((status = 204, description = "Deactivated"), (status = 404, description = "Not Found"))
)]
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    CurrentUser(user): CurrentUser,
) -> Result<axum::http::StatusCode, ApiError> {
    quiz_service::soft_delete_question(&state.db, id, &user).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/v1/quiz-questions/{id}/permanent", tag = "quiz",
    params(("id" = Uuid, Path, description = "Question id")),
    responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found"))
)]
pub async fn remove_permanently(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<axum::http::StatusCode, ApiError> {
    quiz_service::delete_question_permanently(&state.db, id).await?;
    info!(id = %id, "quiz question deleted");
    Ok(axum::http::StatusCode::NO_CONTENT)
}

/// Record one answer attempt; bumps the success or fail counter.
#[utoipa::path(
    post, path = "/v1/quiz-questions/{id}/attempts", tag = "quiz",
    request_body = crate::openapi::AttemptDoc,
    params(("id" = Uuid, Path, description = "Question id")),
    responses((status = 200, description = "Recorded"), (status = 404, description = "Not Found"))
)]
pub async fn record_attempt(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<AttemptInput>,
) -> Result<Json<quiz_question::Model>, ApiError> {
    let updated = quiz_service::record_attempt(&state.db, id, input.success).await?;
    Ok(Json(updated))
}
