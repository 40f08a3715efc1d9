//! Logo asset CRUD. (name, lang, platform) is unique; files live under
//! the logos directory and go through the raster-resize path.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::warn;
use uuid::Uuid;

use models::enums::{Lang, Platform};
use models::logo;

use crate::errors::ServiceError;
use crate::pagination::{Page, Pagination};
use crate::storage::{MediaKind, StorageEngine};
use crate::ListFilter;

pub struct CreateLogo {
    pub name: String,
    pub source_name: Option<String>,
    pub tags: Option<String>,
    pub lang: Lang,
    pub platform: Platform,
    pub display_order: Option<i32>,
}

#[derive(Default)]
pub struct UpdateLogo {
    pub name: Option<String>,
    pub file_name: Option<String>,
    pub source_name: Option<String>,
    pub tags: Option<String>,
    pub lang: Option<Lang>,
    pub platform: Option<Platform>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

async fn ensure_unique_name(
    db: &DatabaseConnection,
    name: &str,
    lang: Lang,
    platform: Platform,
    exclude: Option<Uuid>,
) -> Result<(), ServiceError> {
    let mut query = logo::Entity::find()
        .filter(logo::Column::Name.eq(name))
        .filter(logo::Column::Lang.eq(lang))
        .filter(logo::Column::Platform.eq(platform));
    if let Some(id) = exclude {
        query = query.filter(logo::Column::Id.ne(id));
    }
    let existing = query.one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    if existing.is_some() {
        return Err(ServiceError::conflict("logo with this name and language already exists"));
    }
    Ok(())
}

pub async fn create_logo_from_bytes(
    db: &DatabaseConnection,
    storage: &StorageEngine,
    input: CreateLogo,
    desired_name: &str,
    bytes: &[u8],
    user_id: &str,
) -> Result<logo::Model, ServiceError> {
    logo::validate_name(&input.name)?;
    ensure_unique_name(db, &input.name, input.lang, input.platform, None).await?;
    let stored = storage.store_image(MediaKind::Logo, desired_name, bytes).await?;
    insert_row(db, input, stored.file_name, stored.size_bytes, None, user_id).await
}

pub async fn create_logo_from_url(
    db: &DatabaseConnection,
    storage: &StorageEngine,
    client: &reqwest::Client,
    input: CreateLogo,
    url: &str,
    user_id: &str,
) -> Result<logo::Model, ServiceError> {
    logo::validate_name(&input.name)?;
    ensure_unique_name(db, &input.name, input.lang, input.platform, None).await?;
    let (suggested, bytes) = storage.download(client, url).await?;
    let stored = storage.store_image(MediaKind::Logo, &suggested, &bytes).await?;
    insert_row(db, input, stored.file_name, stored.size_bytes, Some(url.to_string()), user_id)
        .await
}

async fn insert_row(
    db: &DatabaseConnection,
    input: CreateLogo,
    file_name: String,
    size_bytes: i64,
    original_url: Option<String>,
    user_id: &str,
) -> Result<logo::Model, ServiceError> {
    let now = Utc::now().into();
    let am = logo::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        file_name: Set(file_name),
        size_bytes: Set(size_bytes),
        original_url: Set(original_url),
        source_name: Set(input.source_name),
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

pub async fn get_logo(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<logo::Model>, ServiceError> {
    logo::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn update_logo(
    db: &DatabaseConnection,
    storage: &StorageEngine,
    id: Uuid,
    input: UpdateLogo,
    user_id: &str,
) -> Result<logo::Model, ServiceError> {
    let found = logo::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("logo"))?;

    // Re-check uniqueness when any key component changes
    let name = input.name.clone().unwrap_or_else(|| found.name.clone());
    let lang = input.lang.unwrap_or(found.lang);
    let platform = input.platform.unwrap_or(found.platform);
    if input.name.is_some() || input.lang.is_some() || input.platform.is_some() {
        ensure_unique_name(db, &name, lang, platform, Some(id)).await?;
    }

    let current_file = found.file_name.clone();
    let mut am: logo::ActiveModel = found.into();
    if let Some(name) = input.name {
        logo::validate_name(&name)?;
        am.name = Set(name);
    }
    if let Some(desired) = input.file_name {
        let renamed = storage.rename(MediaKind::Logo, &current_file, &desired).await?;
        am.file_name = Set(renamed);
    }
    if let Some(source) = input.source_name {
        am.source_name = Set(Some(source));
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

pub async fn list_logos(
    db: &DatabaseConnection,
    filter: &ListFilter,
    page: Pagination,
) -> Result<Page<logo::Model>, ServiceError> {
    let mut query = logo::Entity::find();
    if !filter.include_inactive {
        query = query.filter(logo::Column::IsActive.eq(true));
    }
    if let Some(lang) = filter.lang {
        query = query.filter(logo::Column::Lang.eq(lang));
    }
    if let Some(platform) = filter.platform {
        query = query.filter(logo::Column::Platform.eq(platform));
    }
    if let Some(tag) = &filter.tag {
        query = query.filter(logo::Column::Tags.contains(tag));
    }
    if let Some(q) = &filter.q {
        query = query.filter(logo::Column::Name.contains(q));
    }
    let query = query
        .order_by_asc(logo::Column::DisplayOrder)
        .order_by_desc(logo::Column::UpdatedAt);

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

pub async fn soft_delete_logo(
    db: &DatabaseConnection,
    id: Uuid,
    user_id: &str,
) -> Result<(), ServiceError> {
    let mut am: logo::ActiveModel = logo::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("logo"))?
        .into();
    am.is_active = Set(false);
    am.updated_at = Set(Utc::now().into());
    am.updated_by = Set(user_id.to_string());
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(())
}

pub async fn delete_logo_permanently(
    db: &DatabaseConnection,
    storage: &StorageEngine,
    id: Uuid,
) -> Result<(), ServiceError> {
    let found = logo::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("logo"))?;
    logo::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if let Err(e) = storage.remove(MediaKind::Logo, &found.file_name).await {
        warn!(logo = %id, file = %found.file_name, error = %e, "file cleanup failed");
    }
    Ok(())
}
