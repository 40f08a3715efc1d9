//! App settings: globally unique keys with free-form string values.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use models::app_setting;
use models::enums::{Lang, Platform};

use crate::errors::ServiceError;
use crate::pagination::{Page, Pagination};
use crate::ListFilter;

pub struct CreateSetting {
    pub key: String,
    pub value: String,
    pub description: Option<String>,
    pub tags: Option<String>,
    pub lang: Lang,
    pub platform: Platform,
    pub display_order: Option<i32>,
}

#[derive(Default)]
pub struct UpdateSetting {
    pub value: Option<String>,
    pub description: Option<String>,
    pub tags: Option<String>,
    pub lang: Option<Lang>,
    pub platform: Option<Platform>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

pub async fn create_setting(
    db: &DatabaseConnection,
    input: CreateSetting,
    user_id: &str,
) -> Result<app_setting::Model, ServiceError> {
    app_setting::validate_key(&input.key)?;
    let existing = app_setting::Entity::find()
        .filter(app_setting::Column::Key.eq(input.key.clone()))
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if existing.is_some() {
        return Err(ServiceError::conflict("setting key already exists"));
    }
    let now = Utc::now().into();
    let am = app_setting::ActiveModel {
        id: Set(Uuid::new_v4()),
        key: Set(input.key),
        value: Set(input.value),
        description: Set(input.description),
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

pub async fn get_setting(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<app_setting::Model>, ServiceError> {
    app_setting::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Key lookup, active rows only. Used for app bootstrap reads.
pub async fn get_setting_by_key(
    db: &DatabaseConnection,
    key: &str,
) -> Result<Option<app_setting::Model>, ServiceError> {
    app_setting::Entity::find()
        .filter(app_setting::Column::Key.eq(key))
        .filter(app_setting::Column::IsActive.eq(true))
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// The key itself is immutable; create a new setting to rename.
pub async fn update_setting(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateSetting,
    user_id: &str,
) -> Result<app_setting::Model, ServiceError> {
    let mut am: app_setting::ActiveModel = app_setting::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("setting"))?
        .into();

    if let Some(value) = input.value {
        am.value = Set(value);
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

pub async fn list_settings(
    db: &DatabaseConnection,
    filter: &ListFilter,
    page: Pagination,
) -> Result<Page<app_setting::Model>, ServiceError> {
    let mut query = app_setting::Entity::find();
    if !filter.include_inactive {
        query = query.filter(app_setting::Column::IsActive.eq(true));
    }
    if let Some(lang) = filter.lang {
        query = query.filter(app_setting::Column::Lang.eq(lang));
    }
    if let Some(platform) = filter.platform {
        query = query.filter(app_setting::Column::Platform.eq(platform));
    }
    if let Some(tag) = &filter.tag {
        query = query.filter(app_setting::Column::Tags.contains(tag));
    }
    if let Some(q) = &filter.q {
        query = query.filter(app_setting::Column::Key.contains(q));
    }
    let query = query
        .order_by_asc(app_setting::Column::DisplayOrder)
        .order_by_desc(app_setting::Column::UpdatedAt);

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

pub async fn soft_delete_setting(
    db: &DatabaseConnection,
    id: Uuid,
    user_id: &str,
) -> Result<(), ServiceError> {
    let mut am: app_setting::ActiveModel = app_setting::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("setting"))?
        .into();
    am.is_active = Set(false);
    am.updated_at = Set(Utc::now().into());
    am.updated_by = Set(user_id.to_string());
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(())
}

pub async fn delete_setting_permanently(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<(), ServiceError> {
    let res = app_setting::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("setting"));
    }
    Ok(())
}
