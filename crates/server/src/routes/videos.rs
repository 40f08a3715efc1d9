//! Video clip endpoints. Creation goes through upload or URL fetch;
//! metadata is patched over JSON.

use axum::extract::{Multipart, Path, Query, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use models::video_clip;
use models::enums::{Lang, Platform};
use service::video_service::{self, CreateVideo, UpdateVideo};

use crate::errors::ApiError;
use crate::extract::CurrentUser;
use crate::routes::{read_multipart, ListQuery, PageResponse, ServerState};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(list))
        .route("/upload", post(upload))
        .route("/fetch", post(fetch_from_url))
        .route("/:id", get(get_one).put(update).delete(remove))
        .route("/:id/permanent", delete(remove_permanently))
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ArticleIdQuery {
    pub article_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct FetchVideoInput {
    pub url: String,
    pub title: String,
    pub source_name: Option<String>,
    pub article_id: Option<Uuid>,
    pub tags: Option<String>,
    #[serde(default)]
    pub lang: Lang,
    #[serde(default)]
    pub platform: Platform,
    pub display_order: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateVideoInput {
    pub title: Option<String>,
    pub file_name: Option<String>,
    pub source_name: Option<String>,
    pub article_id: Option<Uuid>,
    pub tags: Option<String>,
    pub lang: Option<Lang>,
    pub platform: Option<Platform>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// With `article_id` set, returns that article's clips (unpaginated);
/// otherwise a regular filtered page.
#[utoipa::path(
    get, path = "/v1/videos", tag = "videos",
    params(ListQuery, ArticleIdQuery),
    responses((status = 200, description = "List OK"))
)]
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<ListQuery>,
    Query(scope): Query<ArticleIdQuery>,
) -> Result<Json<PageResponse<video_clip::Model>>, ApiError> {
    if let Some(article_id) = scope.article_id {
        let items = video_service::list_videos_by_article(&state.db, article_id).await?;
        let total = items.len() as u64;
        return Ok(Json(PageResponse { items, total, page: 1, per_page: total.max(1) as u32 }));
    }
    let page = video_service::list_videos(&state.db, &q.filter(), q.page()).await?;
    Ok(Json(page.into()))
}

/// Multipart ingest: `file` part plus optional text fields
/// (`title`, `source_name`, `article_id`, `tags`, `lang`, `platform`, `display_order`).
#[utoipa::path(
    post, path = "/v1/videos/upload", tag = "videos",
    responses((status = 200, description = "Created"), (status = 400, description = "Bad Request"))
)]
pub async fn upload(
    State(state): State<ServerState>,
    CurrentUser(user): CurrentUser,
    mp: Multipart,
) -> Result<Json<video_clip::Model>, ApiError> {
    let form = read_multipart(mp).await?;
    let input = CreateVideo {
        title: form.title_or_stem(),
        source_name: form.text("source_name").map(str::to_string),
        article_id: form.text("article_id").and_then(|s| Uuid::parse_str(s).ok()),
        tags: form.text("tags").map(str::to_string),
        lang: form.lang(),
        platform: form.platform(),
        display_order: form.display_order(),
    };
    let created = video_service::create_video_from_bytes(
        &state.db,
        &state.storage,
        input,
        &form.file_name,
        &form.bytes,
        &user,
    )
    .await?;
    info!(id = %created.id, file = %created.file_name, "video uploaded");
    Ok(Json(created))
}

#[utoipa::path(
    post, path = "/v1/videos/fetch", tag = "videos",
    request_body = crate::openapi::FetchMediaDoc,
    responses((status = 200, description = "Created"), (status = 502, description = "Download Failed"))
)]
pub async fn fetch_from_url(
    State(state): State<ServerState>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<FetchVideoInput>,
) -> Result<Json<video_clip::Model>, ApiError> {
    let created = video_service::create_video_from_url(
        &state.db,
        &state.storage,
        &state.http,
        CreateVideo {
            title: input.title,
            source_name: input.source_name,
            article_id: input.article_id,
            tags: input.tags,
            lang: input.lang,
            platform: input.platform,
            display_order: input.display_order,
        },
        &input.url,
        &user,
    )
    .await?;
    info!(id = %created.id, file = %created.file_name, "video fetched");
    Ok(Json(created))
}

#[utoipa::path(
    get, path = "/v1/videos/{id}", tag = "videos",
    params(("id" = Uuid, Path, description = "Video id")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found"))
)]
pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<video_clip::Model>, ApiError> {
    video_service::get_video(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::from(service::errors::ServiceError::not_found("video")))
}

#[utoipa::path(
    put, path = "/v1/videos/{id}", tag = "videos",
    params(("id" = Uuid, Path, description = "Video id")),
    responses((status = 200, description = "Updated"), (status = 404, description = "Not Found"))
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<UpdateVideoInput>,
) -> Result<Json<video_clip::Model>, ApiError> {
    let updated = video_service::update_video(
        &state.db,
        &state.storage,
        id,
        UpdateVideo {
            title: input.title,
            file_name: input.file_name,
            source_name: input.source_name,
            article_id: input.article_id,
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
    delete, path = "/v1/videos/{id}", tag = "videos",
    params(("id" = Uuid, Path, description = "Video id")),
    responses((status = 204, description = "Deactivated"), (status = 404, description = "Not Found"))
)]
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    CurrentUser(user): CurrentUser,
) -> Result<axum::http::StatusCode, ApiError> {
    video_service::soft_delete_video(&state.db, id, &user).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/v1/videos/{id}/permanent", tag = "videos",
    params(("id" = Uuid, Path, description = "Video id")),
    responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found"))
)]
pub async fn remove_permanently(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<axum::http::StatusCode, ApiError> {
    video_service::delete_video_permanently(&state.db, &state.storage, id).await?;
    info!(id = %id, "video deleted");
    Ok(axum::http::StatusCode::NO_CONTENT)
}
