//! Standalone logo endpoints. Unlike website logos these are a catalog
//! of their own, keyed by name per language and platform.

use axum::extract::{Multipart, Path, Query, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use models::enums::{Lang, Platform};
use models::logo;
use service::logo_service::{self, CreateLogo, UpdateLogo};

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

#[derive(Debug, Deserialize)]
pub struct FetchLogoInput {
    pub url: String,
    pub name: String,
    pub source_name: Option<String>,
    pub tags: Option<String>,
    #[serde(default)]
    pub lang: Lang,
    #[serde(default)]
    pub platform: Platform,
    pub display_order: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateLogoInput {
    pub name: Option<String>,
    pub file_name: Option<String>,
    pub source_name: Option<String>,
    pub tags: Option<String>,
    pub lang: Option<Lang>,
    pub platform: Option<Platform>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[utoipa::path(
    get, path = "/v1/logos", tag = "logos",
    params(ListQuery),
    responses((status = 200, description = "List OK"))
)]
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<PageResponse<logo::Model>>, ApiError> {
    let page = logo_service::list_logos(&state.db, &q.filter(), q.page()).await?;
    Ok(Json(page.into()))
}

/// Multipart ingest: `file` part plus `name` and the usual metadata fields.
#[utoipa::path(
    post, path = "/v1/logos/upload", tag = "logos",
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Bad Request"),
        (status = 409, description = "Duplicate Name")
    )
)]
pub async fn upload(
    State(state): State<ServerState>,
    CurrentUser(user): CurrentUser,
    mp: Multipart,
) -> Result<Json<logo::Model>, ApiError> {
    let form = read_multipart(mp).await?;
    let name = match form.text("name") {
        Some(n) => n.to_string(),
        None => form.title_or_stem(),
    };
    let input = CreateLogo {
        name,
        source_name: form.text("source_name").map(str::to_string),
        tags: form.text("tags").map(str::to_string),
        lang: form.lang(),
        platform: form.platform(),
        display_order: form.display_order(),
    };
    let created = logo_service::create_logo_from_bytes(
        &state.db,
        &state.storage,
        input,
        &form.file_name,
        &form.bytes,
        &user,
    )
    .await?;
    info!(id = %created.id, name = %created.name, "logo uploaded");
    Ok(Json(created))
}

#[utoipa::path(
    post, path = "/v1/logos/fetch", tag = "logos",
    request_body = crate::openapi::FetchMediaDoc,
    responses((status = 200, description = "Created"), (status = 502, description = "Download Failed"))
)]
pub async fn fetch_from_url(
    State(state): State<ServerState>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<FetchLogoInput>,
) -> Result<Json<logo::Model>, ApiError> {
    let created = logo_service::create_logo_from_url(
        &state.db,
        &state.storage,
        &state.http,
        CreateLogo {
            name: input.name,
            source_name: input.source_name,
            tags: input.tags,
            lang: input.lang,
            platform: input.platform,
            display_order: input.display_order,
        },
        &input.url,
        &user,
    )
    .await?;
    info!(id = %created.id, name = %created.name, "logo fetched");
    Ok(Json(created))
}

#[utoipa::path(
    get, path = "/v1/logos/{id}", tag = "logos",
    params(("id" = Uuid, Path, description = "Logo id")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found"))
)]
pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<logo::Model>, ApiError> {
    logo_service::get_logo(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::from(service::errors::ServiceError::not_found("logo")))
}

#[utoipa::path(
    put, path = "/v1/logos/{id}", tag = "logos",
    params(("id" = Uuid, Path, description = "Logo id")),
    responses((status = 200, description = "Updated"), (status = 404, description = "Not Found"))
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<UpdateLogoInput>,
) -> Result<Json<logo::Model>, ApiError> {
    let updated = logo_service::update_logo(
        &state.db,
        &state.storage,
        id,
        UpdateLogo {
            name: input.name,
            file_name: input.file_name,
            source_name: input.source_name,
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
    delete, path = "/v1/logos/{id}", tag = "logos",
    params(("id" = Uuid, Path, description = "Logo id")),
    responses((status = 204, description = "Deactivated"), (status = 404, description = "Not Found"))
)]
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    CurrentUser(user): CurrentUser,
) -> Result<axum::http::StatusCode, ApiError> {
    logo_service::soft_delete_logo(&state.db, id, &user).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/v1/logos/{id}/permanent", tag = "logos",
    params(("id" = Uuid, Path, description = "Logo id")),
    responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found"))
)]
pub async fn remove_permanently(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<axum::http::StatusCode, ApiError> {
    logo_service::delete_logo_permanently(&state.db, &state.storage, id).await?;
    info!(id = %id, "logo deleted");
    Ok(axum::http::StatusCode::NO_CONTENT)
}
