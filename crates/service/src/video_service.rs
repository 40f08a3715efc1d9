//! Video clip CRUD. Files are stored as-is under the video directory.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::warn;
use uuid::Uuid;

use models::enums::{Lang, Platform};
use models::video_clip;

use crate::errors::ServiceError;
use crate::pagination::{Page, Pagination};
use crate::storage::{MediaKind, StorageEngine};
use crate::ListFilter;

pub struct CreateVideo {
    pub title: String,
    pub source_name: Option<String>,
    pub article_id: Option<Uuid>,
    pub tags: Option<String>,
    pub lang: Lang,
    pub platform: Platform,
    pub display_order: Option<i32>,
}

#[derive(Default)]
pub struct UpdateVideo {
    pub title: Option<String>,
    /// Desired new file name; triggers a collision-safe rename on disk.
    pub file_name: Option<String>,
    pub source_name: Option<String>,
    pub article_id: Option<Uuid>,
    pub tags: Option<String>,
    pub lang: Option<Lang>,
    pub platform: Option<Platform>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// Ingest uploaded bytes and insert the row.
pub async fn create_video_from_bytes(
    db: &DatabaseConnection,
    storage: &StorageEngine,
    input: CreateVideo,
    desired_name: &str,
    bytes: &[u8],
    user_id: &str,
) -> Result<video_clip::Model, ServiceError> {
    video_clip::validate_title(&input.title)?;
    let stored = storage.store(MediaKind::Video, desired_name, bytes).await?;
    insert_row(db, input, stored.file_name, stored.size_bytes, None, user_id).await
}

/// Download from a remote URL, then ingest as above.
pub async fn create_video_from_url(
    db: &DatabaseConnection,
    storage: &StorageEngine,
    client: &reqwest::Client,
    input: CreateVideo,
    url: &str,
    user_id: &str,
) -> Result<video_clip::Model, ServiceError> {
    video_clip::validate_title(&input.title)?;
    let (suggested, bytes) = storage.download(client, url).await?;
    let stored = storage.store(MediaKind::Video, &suggested, &bytes).await?;
    insert_row(db, input, stored.file_name, stored.size_bytes, Some(url.to_string()), user_id)
        .await
}

async fn insert_row(
    db: &DatabaseConnection,
    input: CreateVideo,
    file_name: String,
    size_bytes: i64,
    original_url: Option<String>,
    user_id: &str,
) -> Result<video_clip::Model, ServiceError> {
    let now = Utc::now().into();
    let am = video_clip::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(input.title),
        file_name: Set(file_name),
        size_bytes: Set(size_bytes),
        original_url: Set(original_url),
        source_name: Set(input.source_name),
        article_id: Set(input.article_id),
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

pub async fn get_video(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<video_clip::Model>, ServiceError> {
    video_clip::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn update_video(
    db: &DatabaseConnection,
    storage: &StorageEngine,
    id: Uuid,
    input: UpdateVideo,
    user_id: &str,
) -> Result<video_clip::Model, ServiceError> {
    let found = video_clip::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("video clip"))?;
    let current_file = found.file_name.clone();
    let mut am: video_clip::ActiveModel = found.into();

    if let Some(title) = input.title {
        video_clip::validate_title(&title)?;
        am.title = Set(title);
    }
    if let Some(desired) = input.file_name {
        let renamed = storage.rename(MediaKind::Video, &current_file, &desired).await?;
        am.file_name = Set(renamed);
    }
    if let Some(source) = input.source_name {
        am.source_name = Set(Some(source));
    }
    if let Some(article_id) = input.article_id {
        am.article_id = Set(Some(article_id));
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

pub async fn list_videos(
    db: &DatabaseConnection,
    filter: &ListFilter,
    page: Pagination,
) -> Result<Page<video_clip::Model>, ServiceError> {
    let mut query = video_clip::Entity::find();
    if !filter.include_inactive {
        query = query.filter(video_clip::Column::IsActive.eq(true));
    }
    if let Some(lang) = filter.lang {
        query = query.filter(video_clip::Column::Lang.eq(lang));
    }
    if let Some(platform) = filter.platform {
        query = query.filter(video_clip::Column::Platform.eq(platform));
    }
    if let Some(tag) = &filter.tag {
        query = query.filter(video_clip::Column::Tags.contains(tag));
    }
    if let Some(q) = &filter.q {
        query = query.filter(video_clip::Column::Title.contains(q));
    }
    let query = query
        .order_by_asc(video_clip::Column::DisplayOrder)
        .order_by_desc(video_clip::Column::UpdatedAt);

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

/// List video clips attached to one article.
pub async fn list_videos_by_article(
    db: &DatabaseConnection,
    article_id: Uuid,
) -> Result<Vec<video_clip::Model>, ServiceError> {
    video_clip::Entity::find()
        .filter(video_clip::Column::ArticleId.eq(article_id))
        .filter(video_clip::Column::IsActive.eq(true))
        .order_by_asc(video_clip::Column::DisplayOrder)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn soft_delete_video(
    db: &DatabaseConnection,
    id: Uuid,
    user_id: &str,
) -> Result<(), ServiceError> {
    let mut am: video_clip::ActiveModel = video_clip::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("video clip"))?
        .into();
    am.is_active = Set(false);
    am.updated_at = Set(Utc::now().into());
    am.updated_by = Set(user_id.to_string());
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(())
}

/// Hard delete removes the row and then the backing file.
pub async fn delete_video_permanently(
    db: &DatabaseConnection,
    storage: &StorageEngine,
    id: Uuid,
) -> Result<(), ServiceError> {
    let found = video_clip::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("video clip"))?;
    video_clip::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if let Err(e) = storage.remove(MediaKind::Video, &found.file_name).await {
        warn!(video = %id, file = %found.file_name, error = %e, "file cleanup failed");
    }
    Ok(())
}
