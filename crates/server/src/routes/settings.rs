//! App setting endpoints. Settings are small key/value rows read by the
//! frontends at bootstrap; the key is immutable once created.

use axum::extract::{Path, Query, State};
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use models::app_setting;
use models::enums::{Lang, Platform};
use service::setting_service::{self, CreateSetting, UpdateSetting};

use crate::errors::ApiError;
use crate::extract::CurrentUser;
use crate::routes::{ListQuery, PageResponse, ServerState};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/by-key/:key", get(get_by_key))
        .route("/:id", get(get_one).put(update).delete(remove))
        .route("/:id/permanent", delete(remove_permanently))
}

#[derive(Debug, Deserialize)]
pub struct CreateSettingInput {
    pub key: String,
    pub value: String,
    pub description: Option<String>,
    pub tags: Option<String>,
    #[serde(default)]
    pub lang: Lang,
    #[serde(default)]
    pub platform: Platform,
    pub display_order: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateSettingInput {
    pub value: Option<String>,
    pub description: Option<String>,
    pub tags: Option<String>,
    pub lang: Option<Lang>,
    pub platform: Option<Platform>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[utoipa::path(
    get, path = "/v1/settings", tag = "settings",
    params(ListQuery),
    responses((status = 200, description = "List OK"))
)]
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<PageResponse<app_setting::Model>>, ApiError> {
    let page = setting_service::list_settings(&state.db, &q.filter(), q.page()).await?;
    Ok(Json(page.into()))
}

#[utoipa::path(
    post, path = "/v1/settings", tag = "settings",
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 409, description = "Duplicate Key")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<CreateSettingInput>,
) -> Result<Json<app_setting::Model>, ApiError> {
    let created = setting_service::create_setting(
        &state.db,
        CreateSetting {
            key: input.key,
            value: input.value,
            description: input.description,
            tags: input.tags,
            lang: input.lang,
            platform: input.platform,
            display_order: input.display_order,
        },
        &user,
    )
    .await?;
    info!(id = %created.id, key = %created.key, "setting created");
    Ok(Json(created))
}

/// Key lookup used by the frontends; inactive settings read as absent.
#[utoipa::path(
    get, path = "/v1/settings/by-key/{key}", tag = "settings",
    params(("key" = String, Path, description = "Setting key")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found"))
)]
pub async fn get_by_key(
    State(state): State<ServerState>,
    Path(key): Path<String>,
) -> Result<Json<app_setting::Model>, ApiError> {
    setting_service::get_setting_by_key(&state.db, &key)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::from(service::errors::ServiceError::not_found("setting")))
}

#[utoipa::path(
    get, path = "/v1/settings/{id}", tag = "settings",
    params(("id" = Uuid, Path, description = "Setting id")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found"))
)]
pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<app_setting::Model>, ApiError> {
    setting_service::get_setting(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::from(service::errors::ServiceError::not_found("setting")))
}

#[utoipa::path(
    put, path = "/v1/settings/{id}", tag = "settings",
    params(("id" = Uuid, Path, description = "Setting id")),
    responses((status = 200, description = "Updated"), (status = 404, description = "Not Found"))
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<UpdateSettingInput>,
) -> Result<Json<app_setting::Model>, ApiError> {
    let updated = setting_service::update_setting(
        &state.db,
        id,
        UpdateSetting {
            value: input.value,
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
    delete, path = "/v1/settings/{id}", tag = "settings",
    params(("id" = Uuid, Path, description = "Setting id")),
    responses((status = 204, description = "Deactivated"), (status = 404, description = "Not Found"))
)]
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    CurrentUser(user): CurrentUser,
) -> Result<axum::http::StatusCode, ApiError> {
    setting_service::soft_delete_setting(&state.db, id, &user).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/v1/settings/{id}/permanent", tag = "settings",
    params(("id" = Uuid, Path, description = "Setting id")),
    responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found"))
)]
pub async fn remove_permanently(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<axum::http::StatusCode, ApiError> {
    setting_service::delete_setting_permanently(&state.db, id).await?;
    info!(id = %id, "setting deleted");
    Ok(axum::http::StatusCode::NO_CONTENT)
}
