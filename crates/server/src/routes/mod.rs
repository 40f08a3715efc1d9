//! Router assembly and shared request/response plumbing.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, Multipart};
use axum::routing::get;
use axum::{Json, Router};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use models::enums::{Lang, Platform};
use service::pagination::{Page, Pagination};
use service::storage::StorageEngine;
use service::ListFilter;

use crate::errors::ApiError;
use crate::openapi::ApiDoc;

pub mod articles;
pub mod audio;
pub mod images;
pub mod logos;
pub mod quiz;
pub mod settings;
pub mod videos;
pub mod vocabulary;
pub mod websites;

/// Uploads above this are rejected before any handler runs.
const MAX_UPLOAD_BYTES: usize = 256 * 1024 * 1024;

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub storage: Arc<StorageEngine>,
    pub http: reqwest::Client,
}

/// Query parameters accepted by every list endpoint.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct ListQuery {
    /// 1-based page index
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    #[param(value_type = Option<String>)]
    pub lang: Option<Lang>,
    #[param(value_type = Option<String>)]
    pub platform: Option<Platform>,
    pub tag: Option<String>,
    /// Substring match on the module's name-ish field
    pub q: Option<String>,
    #[serde(default)]
    pub include_inactive: bool,
}

impl ListQuery {
    pub fn filter(&self) -> ListFilter {
        ListFilter {
            lang: self.lang,
            platform: self.platform,
            tag: self.tag.clone(),
            q: self.q.clone(),
            include_inactive: self.include_inactive,
        }
    }

    pub fn page(&self) -> Pagination {
        Pagination {
            page: self.page.unwrap_or(1),
            per_page: self.per_page.unwrap_or(20),
        }
    }
}

/// JSON envelope for paginated lists.
#[derive(Debug, Serialize)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
}

impl<T> From<Page<T>> for PageResponse<T> {
    fn from(p: Page<T>) -> Self {
        Self {
            items: p.items,
            total: p.total,
            page: p.page,
            per_page: p.per_page,
        }
    }
}

/// One parsed multipart upload: the `file` part plus any text fields.
pub struct UploadForm {
    pub file_name: String,
    pub bytes: Vec<u8>,
    fields: HashMap<String, String>,
}

impl UploadForm {
    pub fn text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str).filter(|s| !s.is_empty())
    }

    pub fn lang(&self) -> Lang {
        self.text("lang").and_then(parse_enum).unwrap_or_default()
    }

    pub fn platform(&self) -> Platform {
        self.text("platform").and_then(parse_enum).unwrap_or_default()
    }

    pub fn display_order(&self) -> Option<i32> {
        self.text("display_order").and_then(|s| s.parse().ok())
    }

    /// Metadata title, falling back to the uploaded file's stem.
    pub fn title_or_stem(&self) -> String {
        if let Some(t) = self.text("title") {
            return t.to_string();
        }
        let (stem, _) = common::text::split_ext(&self.file_name);
        if stem.is_empty() { self.file_name.clone() } else { stem.to_string() }
    }
}

/// Deserialize a lowercase enum token the same way serde does in JSON bodies.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Option<T> {
    serde_json::from_value(serde_json::Value::String(s.to_string())).ok()
}

/// Drain a multipart body, requiring exactly one `file` part.
pub async fn read_multipart(mut mp: Multipart) -> Result<UploadForm, ApiError> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut fields = HashMap::new();
    while let Some(field) = mp
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        if name == "file" {
            let file_name = field.file_name().unwrap_or("upload.bin").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::bad_request(e.to_string()))?;
            file = Some((file_name, data.to_vec()));
        } else if !name.is_empty() {
            let text = field
                .text()
                .await
                .map_err(|e| ApiError::bad_request(e.to_string()))?;
            fields.insert(name, text);
        }
    }
    let (file_name, bytes) =
        file.ok_or_else(|| ApiError::bad_request("multipart body must contain a `file` part"))?;
    Ok(UploadForm { file_name, bytes, fields })
}

#[utoipa::path(get, path = "/healthz", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: JSON API under `/v1`, stored media
/// under `/files`, swagger, health.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let files_root = state.storage.root().to_path_buf();

    let api = Router::new()
        .nest("/v1/articles", articles::router())
        .nest("/v1/images", images::router())
        .nest("/v1/audio", audio::router())
        .nest("/v1/videos", videos::router())
        .nest("/v1/vocabulary", vocabulary::router())
        .nest("/v1/quiz-questions", quiz::router())
        .nest("/v1/websites", websites::router())
        .nest("/v1/logos", logos::router())
        .nest("/v1/settings", settings::router())
        .with_state(state);

    Router::new()
        .route("/healthz", get(health))
        // ServeDir handles range requests, so media seeking works out of the box
        .nest_service("/files", ServeDir::new(files_root))
        .merge(api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_defaults_to_first_page() {
        let q = ListQuery::default();
        let p = q.page();
        assert_eq!(p.page, 1);
        assert_eq!(p.per_page, 20);
        assert!(!q.filter().include_inactive);
    }

    #[test]
    fn parse_enum_accepts_lowercase_tokens() {
        assert_eq!(parse_enum::<Lang>("vi"), Some(Lang::Vi));
        assert_eq!(parse_enum::<Platform>("ru"), Some(Platform::Ru));
        assert_eq!(parse_enum::<Lang>("klingon"), None);
    }
}
