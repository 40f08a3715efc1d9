//! Website catalog CRUD. (name, lang, platform) is unique; each site may
//! carry a logo file under the logos directory.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::warn;
use uuid::Uuid;

use models::enums::{Lang, Platform};
use models::website;

use crate::errors::ServiceError;
use crate::pagination::{Page, Pagination};
use crate::storage::{MediaKind, StorageEngine};
use crate::ListFilter;

pub struct CreateWebsite {
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub tags: Option<String>,
    pub lang: Lang,
    pub platform: Platform,
    pub display_order: Option<i32>,
}

#[derive(Default)]
pub struct UpdateWebsite {
    pub name: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
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
    let mut query = website::Entity::find()
        .filter(website::Column::Name.eq(name))
        .filter(website::Column::Lang.eq(lang))
        .filter(website::Column::Platform.eq(platform));
    if let Some(id) = exclude {
        query = query.filter(website::Column::Id.ne(id));
    }
    let existing = query.one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    if existing.is_some() {
        return Err(ServiceError::conflict("website with this name and language already exists"));
    }
    Ok(())
}

pub async fn create_website(
    db: &DatabaseConnection,
    input: CreateWebsite,
    user_id: &str,
) -> Result<website::Model, ServiceError> {
    website::validate_name(&input.name)?;
    website::validate_url(&input.url)?;
    ensure_unique_name(db, &input.name, input.lang, input.platform, None).await?;
    let now = Utc::now().into();
    let am = website::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        url: Set(input.url),
        description: Set(input.description),
        logo_file: Set(None),
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

pub async fn get_website(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<website::Model>, ServiceError> {
    website::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn update_website(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateWebsite,
    user_id: &str,
) -> Result<website::Model, ServiceError> {
    let found = website::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("website"))?;

    let name = input.name.clone().unwrap_or_else(|| found.name.clone());
    let lang = input.lang.unwrap_or(found.lang);
    let platform = input.platform.unwrap_or(found.platform);
    if input.name.is_some() || input.lang.is_some() || input.platform.is_some() {
        ensure_unique_name(db, &name, lang, platform, Some(id)).await?;
    }

    let mut am: website::ActiveModel = found.into();
    if let Some(name) = input.name {
        website::validate_name(&name)?;
        am.name = Set(name);
    }
    if let Some(url) = input.url {
        website::validate_url(&url)?;
        am.url = Set(url);
    }
    if let Some(description) = input.description {
        am.description = Set(Some(description));
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

pub async fn list_websites(
    db: &DatabaseConnection,
    filter: &ListFilter,
    page: Pagination,
) -> Result<Page<website::Model>, ServiceError> {
    let mut query = website::Entity::find();
    if !filter.include_inactive {
        query = query.filter(website::Column::IsActive.eq(true));
    }
    if let Some(lang) = filter.lang {
        query = query.filter(website::Column::Lang.eq(lang));
    }
    if let Some(platform) = filter.platform {
        query = query.filter(website::Column::Platform.eq(platform));
    }
    if let Some(tag) = &filter.tag {
        query = query.filter(website::Column::Tags.contains(tag));
    }
    if let Some(q) = &filter.q {
        query = query.filter(website::Column::Name.contains(q));
    }
    let query = query
        .order_by_asc(website::Column::DisplayOrder)
        .order_by_desc(website::Column::UpdatedAt);

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

/// Attach or replace the site's logo file.
pub async fn set_website_logo(
    db: &DatabaseConnection,
    storage: &StorageEngine,
    id: Uuid,
    desired_name: &str,
    bytes: &[u8],
    user_id: &str,
) -> Result<website::Model, ServiceError> {
    let found = website::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("website"))?;
    let previous = found.logo_file.clone();
    let stored = storage.store_image(MediaKind::Logo, desired_name, bytes).await?;

    let mut am: website::ActiveModel = found.into();
    am.logo_file = Set(Some(stored.file_name));
    am.updated_at = Set(Utc::now().into());
    am.updated_by = Set(user_id.to_string());
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;

    if let Some(old) = previous {
        if let Err(e) = storage.remove(MediaKind::Logo, &old).await {
            warn!(website = %id, file = %old, error = %e, "old logo cleanup failed");
        }
    }
    Ok(updated)
}

pub async fn soft_delete_website(
    db: &DatabaseConnection,
    id: Uuid,
    user_id: &str,
) -> Result<(), ServiceError> {
    let mut am: website::ActiveModel = website::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("website"))?
        .into();
    am.is_active = Set(false);
    am.updated_at = Set(Utc::now().into());
    am.updated_by = Set(user_id.to_string());
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(())
}

pub async fn delete_website_permanently(
    db: &DatabaseConnection,
    storage: &StorageEngine,
    id: Uuid,
) -> Result<(), ServiceError> {
    let found = website::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("website"))?;
    website::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if let Some(logo) = found.logo_file {
        if let Err(e) = storage.remove(MediaKind::Logo, &logo).await {
            warn!(website = %id, file = %logo, error = %e, "logo cleanup failed");
        }
    }
    Ok(())
}
