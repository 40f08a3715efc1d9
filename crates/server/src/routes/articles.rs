//! Article endpoints: JSON CRUD plus cover-image attachment.

use axum::extract::{Multipart, Path, Query, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use models::article;
use models::enums::{Lang, Platform};
use service::article_service::{self, CreateArticle, UpdateArticle};

use crate::errors::ApiError;
use crate::extract::CurrentUser;
use crate::routes::{read_multipart, ListQuery, PageResponse, ServerState};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(get_one).put(update).delete(remove))
        .route("/:id/permanent", delete(remove_permanently))
        .route("/:id/cover", post(upload_cover))
        .route("/:id/cover/fetch", post(fetch_cover))
}

#[derive(Debug, Deserialize)]
pub struct CreateArticleInput {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    pub content: String,
    pub tags: Option<String>,
    #[serde(default)]
    pub lang: Lang,
    #[serde(default)]
    pub platform: Platform,
    pub display_order: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateArticleInput {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub tags: Option<String>,
    pub lang: Option<Lang>,
    pub platform: Option<Platform>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct FetchInput {
    pub url: String,
}

#[utoipa::path(
    get, path = "/v1/articles", tag = "articles",
    params(ListQuery),
    responses((status = 200, description = "List OK"))
)]
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<PageResponse<article::Model>>, ApiError> {
    let page = article_service::list_articles(&state.db, &q.filter(), q.page()).await?;
    Ok(Json(page.into()))
}

#[utoipa::path(
    post, path = "/v1/articles", tag = "articles",
    request_body = crate::openapi::CreateArticleDoc,
    responses((status = 200, description = "Created"), (status = 400, description = "Validation Error"))
)]
pub async fn create(
    State(state): State<ServerState>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<CreateArticleInput>,
) -> Result<Json<article::Model>, ApiError> {
    let created = article_service::create_article(
        &state.db,
        CreateArticle {
            title: input.title,
            summary: input.summary,
            content: input.content,
            tags: input.tags,
            lang: input.lang,
            platform: input.platform,
            display_order: input.display_order,
        },
        &user,
    )
    .await?;
    info!(id = %created.id, title = %created.title, "article created");
    Ok(Json(created))
}

#[utoipa::path(
    get, path = "/v1/articles/{id}", tag = "articles",
    params(("id" = Uuid, Path, description = "Article id")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found"))
)]
pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<article::Model>, ApiError> {
    article_service::get_article(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::from(service::errors::ServiceError::not_found("article")))
}

#[utoipa::path(
    put, path = "/v1/articles/{id}", tag = "articles",
    params(("id" = Uuid, Path, description = "Article id")),
    request_body = crate::openapi::UpdateArticleDoc,
    responses((status = 200, description = "Updated"), (status = 404, description = "Not Found"))
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<UpdateArticleInput>,
) -> Result<Json<article::Model>, ApiError> {
    let updated = article_service::update_article(
        &state.db,
        id,
        UpdateArticle {
            title: input.title,
            summary: input.summary,
            content: input.content,
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
    delete, path = "/v1/articles/{id}", tag = "articles",
    params(("id" = Uuid, Path, description = "Article id")),
    responses((status = 204, description = "Deactivated"), (status = 404, description = "Not Found"))
)]
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    CurrentUser(user): CurrentUser,
) -> Result<axum::http::StatusCode, ApiError> {
    article_service::soft_delete_article(&state.db, id, &user).await?;
    info!(id = %id, "article deactivated");
    Ok(axum::http::StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/v1/articles/{id}/permanent", tag = "articles",
    params(("id" = Uuid, Path, description = "Article id")),
    responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found"))
)]
pub async fn remove_permanently(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<axum::http::StatusCode, ApiError> {
    article_service::delete_article_permanently(&state.db, &state.storage, id).await?;
    info!(id = %id, "article deleted");
    Ok(axum::http::StatusCode::NO_CONTENT)
}

/// Multipart upload of the cover image (`file` part, image bytes).
#[utoipa::path(
    post, path = "/v1/articles/{id}/cover", tag = "articles",
    params(("id" = Uuid, Path, description = "Article id")),
    responses((status = 200, description = "Cover Updated"), (status = 404, description = "Not Found"))
)]
pub async fn upload_cover(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    CurrentUser(user): CurrentUser,
    mp: Multipart,
) -> Result<Json<article::Model>, ApiError> {
    let form = read_multipart(mp).await?;
    let updated = article_service::set_cover(
        &state.db,
        &state.storage,
        id,
        &form.file_name,
        &form.bytes,
        None,
        &user,
    )
    .await?;
    Ok(Json(updated))
}

/// Pull the cover from a remote URL instead of uploading bytes.
#[utoipa::path(
    post, path = "/v1/articles/{id}/cover/fetch", tag = "articles",
    request_body = crate::openapi::FetchUrlDoc,
    params(("id" = Uuid, Path, description = "Article id")),
    responses((status = 200, description = "Cover Updated"), (status = 502, description = "Download Failed"))
)]
pub async fn fetch_cover(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<FetchInput>,
) -> Result<Json<article::Model>, ApiError> {
    let updated = article_service::set_cover_from_url(
        &state.db,
        &state.storage,
        &state.http,
        id,
        &input.url,
        &user,
    )
    .await?;
    Ok(Json(updated))
}
