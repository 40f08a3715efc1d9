//! Recommended-website endpoints with logo attachment.

use axum::extract::{Multipart, Path, Query, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use models::enums::{Lang, Platform};
use models::website;
use service::website_service::{self, CreateWebsite, UpdateWebsite};

use crate::errors::ApiError;
use crate::extract::CurrentUser;
use crate::routes::{read_multipart, ListQuery, PageResponse, ServerState};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(get_one).put(update).delete(remove))
        .route("/:id/permanent", delete(remove_permanently))
        .route("/:id/logo", post(upload_logo))
}

#[derive(Debug, Deserialize)]
pub struct CreateWebsiteInput {
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub tags: Option<String>,
    #[serde(default)]
    pub lang: Lang,
    #[serde(default)]
    pub platform: Platform,
    pub display_order: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateWebsiteInput {
    pub name: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub tags: Option<String>,
    pub lang: Option<Lang>,
    pub platform: Option<Platform>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[utoipa::path(
    get, path = "/v1/websites", tag = "websites",
    params(ListQuery),
    responses((status = 200, description = "List OK"))
)]
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<PageResponse<website::Model>>, ApiError> {
    let page = website_service::list_websites(&state.db, &q.filter(), q.page()).await?;
    Ok(Json(page.into()))
}

#[utoipa::path(
    post, path = "/v1/websites", tag = "websites",
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 409, description = "Duplicate Name")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<CreateWebsiteInput>,
) -> Result<Json<website::Model>, ApiError> {
    let created = website_service::create_website(
        &state.db,
        CreateWebsite {
            name: input.name,
            url: input.url,
            description: input.description,
            tags: input.tags,
            lang: input.lang,
            platform: input.platform,
            display_order: input.display_order,
        },
        &user,
    )
    .await?;
    info!(id = %created.id, name = %created.name, "website created");
    Ok(Json(created))
}

#[utoipa::path(
    get, path = "/v1/websites/{id}", tag = "websites",
    params(("id" = Uuid, Path, description = "Website id")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found"))
)]
pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<website::Model>, ApiError> {
    website_service::get_website(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::from(service::errors::ServiceError::not_found("website")))
}

#[utoipa::path(
    put, path = "/v1/websites/{id}", tag = "websites",
    params(("id" = Uuid, Path, description = "Website id")),
    responses((status = 200, description = "Updated"), (status = 404, description = "Not Found"))
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<UpdateWebsiteInput>,
) -> Result<Json<website::Model>, ApiError> {
    let updated = website_service::update_website(
        &state.db,
        id,
        UpdateWebsite {
            name: input.name,
            url: input.url,
            description: input.description,
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
    delete, path = "/v1/websites/{id}", tag = "websites",
    params(("id" = Uuid, Path, description = "Website id")),
    responses((status = 204, description = "Deactivated"), (status = 404, description = "Not Found"))
)]
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    CurrentUser(user): CurrentUser,
) -> Result<axum::http::StatusCode, ApiError> {
    website_service::soft_delete_website(&state.db, id, &user).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/v1/websites/{id}/permanent", tag = "websites",
    params(("id" = Uuid, Path, description = "Website id")),
    responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found"))
)]
pub async fn remove_permanently(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<axum::http::StatusCode, ApiError> {
    website_service::delete_website_permanently(&state.db, &state.storage, id).await?;
    info!(id = %id, "website deleted");
    Ok(axum::http::StatusCode::NO_CONTENT)
}

/// Attach or replace the site's logo (`file` part, image bytes).
#[utoipa::path(
    post, path = "/v1/websites/{id}/logo", tag = "websites",
    params(("id" = Uuid, Path, description = "Website id")),
    responses((status = 200, description = "Logo Updated"), (status = 404, description = "Not Found"))
)]
pub async fn upload_logo(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    CurrentUser(user): CurrentUser,
    mp: Multipart,
) -> Result<Json<website::Model>, ApiError> {
    let form = read_multipart(mp).await?;
    let updated = website_service::set_website_logo(
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
