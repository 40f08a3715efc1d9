//! OpenAPI document. Request bodies are described through standalone
//! Doc structs so entity models stay free of schema derives.

use utoipa::{OpenApi, ToSchema};

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
pub struct CreateArticleDoc {
    pub title: String,
    pub summary: Option<String>,
    pub content: String,
    pub tags: Option<String>,
    pub lang: Option<String>,
    pub platform: Option<String>,
    pub display_order: Option<i32>,
}

#[derive(ToSchema)]
pub struct UpdateArticleDoc {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub tags: Option<String>,
    pub lang: Option<String>,
    pub platform: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// Body of the article cover fetch endpoint.
#[derive(ToSchema)]
pub struct FetchUrlDoc {
    pub url: String,
}

/// Body of the media fetch endpoints: source URL plus metadata.
#[derive(ToSchema)]
pub struct FetchMediaDoc {
    pub url: String,
    pub title: Option<String>,
    pub name: Option<String>,
    pub source_name: Option<String>,
    pub article_id: Option<String>,
    pub tags: Option<String>,
    pub lang: Option<String>,
    pub platform: Option<String>,
    pub display_order: Option<i32>,
}

#[derive(ToSchema)]
pub struct CreateVocabularyDoc {
    pub word: String,
    pub meaning: String,
    pub tenses: Option<String>,
    pub phonetic: Option<String>,
    pub tags: Option<String>,
    pub lang: Option<String>,
    pub platform: Option<String>,
    pub display_order: Option<i32>,
}

#[derive(ToSchema)]
pub struct CreateQuestionDoc {
    pub question_type: String,
    pub question: String,
    pub answer: String,
    pub options: Option<Vec<String>>,
    pub difficulty_level: Option<i32>,
    pub tags: Option<String>,
    pub lang: Option<String>,
    pub platform: Option<String>,
    pub display_order: Option<i32>,
}

#[derive(ToSchema)]
pub struct AttemptDoc {
    pub success: bool,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::articles::list,
        crate::routes::articles::create,
        crate::routes::articles::get_one,
        crate::routes::articles::update,
        crate::routes::articles::remove,
        crate::routes::articles::remove_permanently,
        crate::routes::articles::upload_cover,
        crate::routes::articles::fetch_cover,
        crate::routes::images::list,
        crate::routes::images::upload,
        crate::routes::images::fetch_from_url,
        crate::routes::images::get_one,
        crate::routes::images::update,
        crate::routes::images::remove,
        crate::routes::images::remove_permanently,
        crate::routes::audio::list,
        crate::routes::audio::upload,
        crate::routes::audio::fetch_from_url,
        crate::routes::audio::get_one,
        crate::routes::audio::update,
        crate::routes::audio::remove,
        crate::routes::audio::remove_permanently,
        crate::routes::videos::list,
        crate::routes::videos::upload,
        crate::routes::videos::fetch_from_url,
        crate::routes::videos::get_one,
        crate::routes::videos::update,
        crate::routes::videos::remove,
        crate::routes::videos::remove_permanently,
        crate::routes::vocabulary::list,
        crate::routes::vocabulary::create,
        crate::routes::vocabulary::get_one,
        crate::routes::vocabulary::update,
        crate::routes::vocabulary::remove,
        crate::routes::vocabulary::remove_permanently,
        crate::routes::vocabulary::upload_audio,
        crate::routes::vocabulary::upload_image,
        crate::routes::quiz::list,
        crate::routes::quiz::create,
        crate::routes::quiz::get_one,
        crate::routes::quiz::update,
        crate::routes::quiz::remove,
        crate::routes::quiz::remove_permanently,
        crate::routes::quiz::record_attempt,
        crate::routes::websites::list,
        crate::routes::websites::create,
        crate::routes::websites::get_one,
        crate::routes::websites::update,
        crate::routes::websites::remove,
        crate::routes::websites::remove_permanently,
        crate::routes::websites::upload_logo,
        crate::routes::logos::list,
        crate::routes::logos::upload,
        crate::routes::logos::fetch_from_url,
        crate::routes::logos::get_one,
        crate::routes::logos::update,
        crate::routes::logos::remove,
        crate::routes::logos::remove_permanently,
        crate::routes::settings::list,
        crate::routes::settings::create,
        crate::routes::settings::get_by_key,
        crate::routes::settings::get_one,
        crate::routes::settings::update,
        crate::routes::settings::remove,
        crate::routes::settings::remove_permanently,
    ),
    components(
        schemas(
            HealthResponse,
            CreateArticleDoc,
            UpdateArticleDoc,
            FetchUrlDoc,
            FetchMediaDoc,
            CreateVocabularyDoc,
            CreateQuestionDoc,
            AttemptDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "articles"),
        (name = "images"),
        (name = "audio"),
        (name = "videos"),
        (name = "vocabulary"),
        (name = "quiz"),
        (name = "websites"),
        (name = "logos"),
        (name = "settings"),
    )
)]
pub struct ApiDoc;
