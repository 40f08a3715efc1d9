//! Article CRUD plus cover-image lifecycle.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::{info, warn};
use uuid::Uuid;

use models::article;
use models::enums::{Lang, Platform};

use crate::errors::ServiceError;
use crate::pagination::{Page, Pagination};
use crate::storage::{MediaKind, StorageEngine};
use crate::ListFilter;

pub struct CreateArticle {
    pub title: String,
    pub summary: String,
    pub content: String,
    pub tags: Option<String>,
    pub lang: Lang,
    pub platform: Platform,
    pub display_order: Option<i32>,
}

/// Patch input; `None` fields leave the entity untouched.
#[derive(Default)]
pub struct UpdateArticle {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub tags: Option<String>,
    pub lang: Option<Lang>,
    pub platform: Option<Platform>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

pub async fn create_article(
    db: &DatabaseConnection,
    input: CreateArticle,
    user_id: &str,
) -> Result<article::Model, ServiceError> {
    article::validate_title(&input.title)?;
    article::validate_content(&input.content)?;
    let now = Utc::now().into();
    let am = article::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(input.title),
        summary: Set(input.summary),
        content: Set(input.content),
        cover_image: Set(None),
        cover_image_url: Set(None),
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

pub async fn get_article(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<article::Model>, ServiceError> {
    article::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn update_article(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateArticle,
    user_id: &str,
) -> Result<article::Model, ServiceError> {
    let mut am: article::ActiveModel = article::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("article"))?
        .into();

    if let Some(title) = input.title {
        article::validate_title(&title)?;
        am.title = Set(title);
    }
    if let Some(summary) = input.summary {
        am.summary = Set(summary);
    }
    if let Some(content) = input.content {
        article::validate_content(&content)?;
        am.content = Set(content);
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

pub async fn list_articles(
    db: &DatabaseConnection,
    filter: &ListFilter,
    page: Pagination,
) -> Result<Page<article::Model>, ServiceError> {
    let mut query = article::Entity::find();
    if !filter.include_inactive {
        query = query.filter(article::Column::IsActive.eq(true));
    }
    if let Some(lang) = filter.lang {
        query = query.filter(article::Column::Lang.eq(lang));
    }
    if let Some(platform) = filter.platform {
        query = query.filter(article::Column::Platform.eq(platform));
    }
    if let Some(tag) = &filter.tag {
        query = query.filter(article::Column::Tags.contains(tag));
    }
    if let Some(q) = &filter.q {
        query = query.filter(article::Column::Title.contains(q));
    }
    let query = query
        .order_by_asc(article::Column::DisplayOrder)
        .order_by_desc(article::Column::UpdatedAt);

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

/// Soft delete: the row stays, default lists stop returning it.
pub async fn soft_delete_article(
    db: &DatabaseConnection,
    id: Uuid,
    user_id: &str,
) -> Result<(), ServiceError> {
    let mut am: article::ActiveModel = article::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("article"))?
        .into();
    am.is_active = Set(false);
    am.updated_at = Set(Utc::now().into());
    am.updated_by = Set(user_id.to_string());
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(())
}

/// Hard delete removes the row and the cover file, if any.
pub async fn delete_article_permanently(
    db: &DatabaseConnection,
    storage: &StorageEngine,
    id: Uuid,
) -> Result<(), ServiceError> {
    let found = article::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("article"))?;
    article::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if let Some(cover) = found.cover_image {
        if let Err(e) = storage.remove(MediaKind::Cover, &cover).await {
            warn!(article = %id, file = %cover, error = %e, "cover cleanup failed");
        }
    }
    Ok(())
}

/// Attach or replace the cover from uploaded bytes. The old file is removed
/// after the new one is safely on disk.
pub async fn set_cover(
    db: &DatabaseConnection,
    storage: &StorageEngine,
    id: Uuid,
    desired_name: &str,
    bytes: &[u8],
    source_url: Option<String>,
    user_id: &str,
) -> Result<article::Model, ServiceError> {
    let found = article::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("article"))?;
    let previous = found.cover_image.clone();

    let stored = storage.store_image(MediaKind::Cover, desired_name, bytes).await?;

    let mut am: article::ActiveModel = found.into();
    am.cover_image = Set(Some(stored.file_name.clone()));
    am.cover_image_url = Set(source_url);
    am.updated_at = Set(Utc::now().into());
    am.updated_by = Set(user_id.to_string());
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;

    if let Some(old) = previous {
        if let Err(e) = storage.remove(MediaKind::Cover, &old).await {
            warn!(article = %id, file = %old, error = %e, "old cover cleanup failed");
        }
    }
    info!(article = %id, file = %stored.file_name, "cover updated");
    Ok(updated)
}

/// Fetch the cover from a remote URL and attach it.
pub async fn set_cover_from_url(
    db: &DatabaseConnection,
    storage: &StorageEngine,
    client: &reqwest::Client,
    id: Uuid,
    url: &str,
    user_id: &str,
) -> Result<article::Model, ServiceError> {
    let (suggested, bytes) = storage.download(client, url).await?;
    set_cover(db, storage, id, &suggested, &bytes, Some(url.to_string()), user_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn article_crud_round_trip() {
        let db = match get_db().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return;
            }
        };

        let input = CreateArticle {
            title: format!("Test article {}", Uuid::new_v4()),
            summary: "summary".into(),
            content: "body text".into(),
            tags: Some("grammar,beginner".into()),
            lang: Lang::En,
            platform: Platform::Main,
            display_order: Some(3),
        };
        let created = create_article(&db, input, "tester").await.expect("create");
        assert_eq!(created.created_by, "tester");
        assert!(created.is_active);

        let fetched = get_article(&db, created.id).await.expect("get").expect("some");
        assert_eq!(fetched.title, created.title);
        assert_eq!(fetched.display_order, 3);

        // Patch only the summary; everything else must survive
        let patch = UpdateArticle { summary: Some("new summary".into()), ..Default::default() };
        let updated = update_article(&db, created.id, patch, "editor").await.expect("update");
        assert_eq!(updated.summary, "new summary");
        assert_eq!(updated.title, created.title);
        assert_eq!(updated.updated_by, "editor");
        assert!(updated.updated_at >= created.updated_at);

        // Soft delete hides from default list, still fetchable by id
        soft_delete_article(&db, created.id, "editor").await.expect("soft delete");
        let after = get_article(&db, created.id).await.expect("get").expect("some");
        assert!(!after.is_active);
        let listed = list_articles(
            &db,
            &ListFilter { q: Some(created.title.clone()), ..Default::default() },
            Pagination::default(),
        )
        .await
        .expect("list");
        assert!(listed.items.iter().all(|a| a.id != created.id));
        let listed_all = list_articles(
            &db,
            &ListFilter {
                q: Some(created.title.clone()),
                include_inactive: true,
                ..Default::default()
            },
            Pagination::default(),
        )
        .await
        .expect("list inactive");
        assert!(listed_all.items.iter().any(|a| a.id == created.id));

        let storage = crate::storage::StorageEngine::new(
            std::env::temp_dir().join("cms-article-test"),
            1600,
            1024,
        );
        delete_article_permanently(&db, &storage, created.id).await.expect("hard delete");
        assert!(get_article(&db, created.id).await.expect("get").is_none());
    }

    #[tokio::test]
    async fn update_missing_article_is_not_found() {
        let db = match get_db().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return;
            }
        };
        let err = update_article(&db, Uuid::new_v4(), UpdateArticle::default(), "x")
            .await
            .expect_err("should be missing");
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
