//! Vocabulary endpoints: JSON CRUD plus pronunciation audio and
//! illustration attachments.

use axum::extract::{Multipart, Path, Query, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use models::enums::{Lang, Platform};
use models::vocabulary;
use service::vocabulary_service::{self, CreateVocabulary, UpdateVocabulary};

use crate::errors::ApiError;
use crate::extract::CurrentUser;
use crate::routes::{read_multipart, ListQuery, PageResponse, ServerState};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(get_one).put(update).delete(remove))
        .route("/:id/permanent", delete(remove_permanently))
        .route("/:id/audio", post(upload_audio))
        .route("/:id/image", post(upload_image))
}

#[derive(Debug, Deserialize)]
pub struct CreateVocabularyInput {
    pub word: String,
    pub meaning: String,
    pub tenses: Option<String>,
    pub phonetic: Option<String>,
    pub tags: Option<String>,
    #[serde(default)]
    pub lang: Lang,
    #[serde(default)]
    pub platform: Platform,
    pub display_order: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateVocabularyInput {
    pub word: Option<String>,
    pub meaning: Option<String>,
    pub tenses: Option<String>,
    pub phonetic: Option<String>,
    pub tags: Option<String>,
    pub lang: Option<Lang>,
    pub platform: Option<Platform>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[utoipa::path(
    get, path = "/v1/vocabulary", tag = "vocabulary",
    params(ListQuery),
    responses((status = 200, description = "List OK"))
)]
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<PageResponse<vocabulary::Model>>, ApiError> {
    let page = vocabulary_service::list_vocabulary(&state.db, &q.filter(), q.page()).await?;
    Ok(Json(page.into()))
}

#[utoipa::path(
    post, path = "/v1/vocabulary", tag = "vocabulary",
    request_body = crate::openapi::CreateVocabularyDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 409, description = "Duplicate Word")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<CreateVocabularyInput>,
) -> Result<Json<vocabulary::Model>, ApiError> {
    let created = vocabulary_service::create_vocabulary(
        &state.db,
        CreateVocabulary {
            word: input.word,
            meaning: input.meaning,
            tenses: input.tenses,
            phonetic: input.phonetic,
            tags: input.tags,
            lang: input.lang,
            platform: input.platform,
            display_order: input.display_order,
        },
        &user,
    )
    .await?;
    info!(id = %created.id, word = %created.word, "vocabulary created");
    Ok(Json(created))
}

#[utoipa::path(
    get, path = "/v1/vocabulary/{id}", tag = "vocabulary",
    params(("id" = Uuid, Path, description = "Vocabulary id")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found"))
)]
pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<vocabulary::Model>, ApiError> {
    vocabulary_service::get_vocabulary(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::from(service::errors::ServiceError::not_found("vocabulary entry")))
}

#[utoipa::path(
    put, path = "/v1/vocabulary/{id}", tag = "vocabulary",
    params(("id" = Uuid, Path, description = "Vocabulary id")),
    responses((status = 200, description = "Updated"), (status = 404, description = "Not Found"))
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<UpdateVocabularyInput>,
) -> Result<Json<vocabulary::Model>, ApiError> {
    let updated = vocabulary_service::update_vocabulary(
        &state.db,
        id,
        UpdateVocabulary {
            word: input.word,
            meaning: input.meaning,
            tenses: input.tenses,
            phonetic: input.phonetic,
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
    delete, path = "/v1/vocabulary/{id}", tag = "vocabulary",
    params(("id" = Uuid, Path, description = "Vocabulary id")),
    responses((status = 204, description = "Deactivated"), (status = 404, description = "Not Found"))
)]
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    CurrentUser(user): CurrentUser,
) -> Result<axum::http::StatusCode, ApiError> {
    vocabulary_service::soft_delete_vocabulary(&state.db, id, &user).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/v1/vocabulary/{id}/permanent", tag = "vocabulary",
    params(("id" = Uuid, Path, description = "Vocabulary id")),
    responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found"))
)]
pub async fn remove_permanently(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<axum::http::StatusCode, ApiError> {
    vocabulary_service::delete_vocabulary_permanently(&state.db, &state.storage, id).await?;
    info!(id = %id, "vocabulary deleted");
    Ok(axum::http::StatusCode::NO_CONTENT)
}

/// Attach the pronunciation clip (`file` part, audio bytes).
#[utoipa::path(
    post, path = "/v1/vocabulary/{id}/audio", tag = "vocabulary",
    params(("id" = Uuid, Path, description = "Vocabulary id")),
    responses((status = 200, description = "Audio Updated"), (status = 404, description = "Not Found"))
)]
pub async fn upload_audio(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    CurrentUser(user): CurrentUser,
    mp: Multipart,
) -> Result<Json<vocabulary::Model>, ApiError> {
    let form = read_multipart(mp).await?;
    let updated = vocabulary_service::set_vocabulary_audio(
        &state.db,
        &state.storage,
        id,
        &form.file_name,
        &form.bytes,
        &user,
    )
    .await?;
    Ok(Json(updated))
}

/// Attach the illustration (`file` part, image bytes).
#[utoipa::path(
    post, path = "/v1/vocabulary/{id}/image", tag = "vocabulary",
    params(("id" = Uuid, Path, description = "Vocabulary id")),
    responses((status = 200, description = "Image Updated"), (status = 404, description = "Not Found"))
)]
pub async fn upload_image(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    CurrentUser(user): CurrentUser,
    mp: Multipart,
) -> Result<Json<vocabulary::Model>, ApiError> {
    let form = read_multipart(mp).await?;
    let updated = vocabulary_service::set_vocabulary_image(
        &state.db,
        &state.storage,
        id,
        &form.file_name,
        &form.bytes,
        &user,
    )
    .await?;
    Ok(Json(updated))
}
