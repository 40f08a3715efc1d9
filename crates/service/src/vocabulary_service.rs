//! Vocabulary CRUD. (word, lang, platform) is unique; entries may carry a
//! pronunciation clip and an illustration, managed through the storage
//! engine like any other media.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::warn;
use uuid::Uuid;

use models::enums::{Lang, Platform};
use models::vocabulary;

use crate::errors::ServiceError;
use crate::pagination::{Page, Pagination};
use crate::storage::{MediaKind, StorageEngine};
use crate::ListFilter;

pub struct CreateVocabulary {
    pub word: String,
    pub meaning: String,
    pub tenses: Option<String>,
    pub phonetic: Option<String>,
    pub tags: Option<String>,
    pub lang: Lang,
    pub platform: Platform,
    pub display_order: Option<i32>,
}

#[derive(Default)]
pub struct UpdateVocabulary {
    pub word: Option<String>,
    pub meaning: Option<String>,
    pub tenses: Option<String>,
    pub phonetic: Option<String>,
    pub tags: Option<String>,
    pub lang: Option<Lang>,
    pub platform: Option<Platform>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

async fn ensure_unique_word(
    db: &DatabaseConnection,
    word: &str,
    lang: Lang,
    platform: Platform,
    exclude: Option<Uuid>,
) -> Result<(), ServiceError> {
    let mut query = vocabulary::Entity::find()
        .filter(vocabulary::Column::Word.eq(word))
        .filter(vocabulary::Column::Lang.eq(lang))
        .filter(vocabulary::Column::Platform.eq(platform));
    if let Some(id) = exclude {
        query = query.filter(vocabulary::Column::Id.ne(id));
    }
    let existing = query.one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    if existing.is_some() {
        return Err(ServiceError::conflict("word already exists for this language"));
    }
    Ok(())
}

pub async fn create_vocabulary(
    db: &DatabaseConnection,
    input: CreateVocabulary,
    user_id: &str,
) -> Result<vocabulary::Model, ServiceError> {
    vocabulary::validate_word(&input.word)?;
    vocabulary::validate_meaning(&input.meaning)?;
    ensure_unique_word(db, &input.word, input.lang, input.platform, None).await?;
    let now = Utc::now().into();
    let am = vocabulary::ActiveModel {
        id: Set(Uuid::new_v4()),
        word: Set(input.word),
        meaning: Set(input.meaning),
        tenses: Set(input.tenses),
        phonetic: Set(input.phonetic),
        audio_file: Set(None),
        image_file: Set(None),
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

pub async fn get_vocabulary(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<vocabulary::Model>, ServiceError> {
    vocabulary::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn update_vocabulary(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateVocabulary,
    user_id: &str,
) -> Result<vocabulary::Model, ServiceError> {
    let found = vocabulary::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("vocabulary entry"))?;

    let word = input.word.clone().unwrap_or_else(|| found.word.clone());
    let lang = input.lang.unwrap_or(found.lang);
    let platform = input.platform.unwrap_or(found.platform);
    if input.word.is_some() || input.lang.is_some() || input.platform.is_some() {
        ensure_unique_word(db, &word, lang, platform, Some(id)).await?;
    }

    let mut am: vocabulary::ActiveModel = found.into();
    if let Some(word) = input.word {
        vocabulary::validate_word(&word)?;
        am.word = Set(word);
    }
    if let Some(meaning) = input.meaning {
        vocabulary::validate_meaning(&meaning)?;
        am.meaning = Set(meaning);
    }
    if let Some(tenses) = input.tenses {
        am.tenses = Set(Some(tenses));
    }
    if let Some(phonetic) = input.phonetic {
        am.phonetic = Set(Some(phonetic));
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

pub async fn list_vocabulary(
    db: &DatabaseConnection,
    filter: &ListFilter,
    page: Pagination,
) -> Result<Page<vocabulary::Model>, ServiceError> {
    let mut query = vocabulary::Entity::find();
    if !filter.include_inactive {
        query = query.filter(vocabulary::Column::IsActive.eq(true));
    }
    if let Some(lang) = filter.lang {
        query = query.filter(vocabulary::Column::Lang.eq(lang));
    }
    if let Some(platform) = filter.platform {
        query = query.filter(vocabulary::Column::Platform.eq(platform));
    }
    if let Some(tag) = &filter.tag {
        query = query.filter(vocabulary::Column::Tags.contains(tag));
    }
    if let Some(q) = &filter.q {
        query = query.filter(vocabulary::Column::Word.contains(q));
    }
    let query = query
        .order_by_asc(vocabulary::Column::DisplayOrder)
        .order_by_desc(vocabulary::Column::UpdatedAt);

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

/// Attach or replace the pronunciation clip.
pub async fn set_vocabulary_audio(
    db: &DatabaseConnection,
    storage: &StorageEngine,
    id: Uuid,
    desired_name: &str,
    bytes: &[u8],
    user_id: &str,
) -> Result<vocabulary::Model, ServiceError> {
    let found = vocabulary::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("vocabulary entry"))?;
    let previous = found.audio_file.clone();
    let stored = storage.store(MediaKind::Audio, desired_name, bytes).await?;

    let mut am: vocabulary::ActiveModel = found.into();
    am.audio_file = Set(Some(stored.file_name));
    am.updated_at = Set(Utc::now().into());
    am.updated_by = Set(user_id.to_string());
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;

    if let Some(old) = previous {
        if let Err(e) = storage.remove(MediaKind::Audio, &old).await {
            warn!(vocabulary = %id, file = %old, error = %e, "old audio cleanup failed");
        }
    }
    Ok(updated)
}

/// Attach or replace the illustration.
pub async fn set_vocabulary_image(
    db: &DatabaseConnection,
    storage: &StorageEngine,
    id: Uuid,
    desired_name: &str,
    bytes: &[u8],
    user_id: &str,
) -> Result<vocabulary::Model, ServiceError> {
    let found = vocabulary::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("vocabulary entry"))?;
    let previous = found.image_file.clone();
    let stored = storage.store_image(MediaKind::Image, desired_name, bytes).await?;

    let mut am: vocabulary::ActiveModel = found.into();
    am.image_file = Set(Some(stored.file_name));
    am.updated_at = Set(Utc::now().into());
    am.updated_by = Set(user_id.to_string());
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;

    if let Some(old) = previous {
        if let Err(e) = storage.remove(MediaKind::Image, &old).await {
            warn!(vocabulary = %id, file = %old, error = %e, "old image cleanup failed");
        }
    }
    Ok(updated)
}

pub async fn soft_delete_vocabulary(
    db: &DatabaseConnection,
    id: Uuid,
    user_id: &str,
) -> Result<(), ServiceError> {
    let mut am: vocabulary::ActiveModel = vocabulary::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("vocabulary entry"))?
        .into();
    am.is_active = Set(false);
    am.updated_at = Set(Utc::now().into());
    am.updated_by = Set(user_id.to_string());
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(())
}

pub async fn delete_vocabulary_permanently(
    db: &DatabaseConnection,
    storage: &StorageEngine,
    id: Uuid,
) -> Result<(), ServiceError> {
    let found = vocabulary::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("vocabulary entry"))?;
    vocabulary::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if let Some(audio) = found.audio_file {
        if let Err(e) = storage.remove(MediaKind::Audio, &audio).await {
            warn!(vocabulary = %id, file = %audio, error = %e, "audio cleanup failed");
        }
    }
    if let Some(img) = found.image_file {
        if let Err(e) = storage.remove(MediaKind::Image, &img).await {
            warn!(vocabulary = %id, file = %img, error = %e, "image cleanup failed");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn duplicate_word_per_language_is_rejected() {
        let db = match get_db().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return;
            }
        };

        let word = format!("unique-{}", Uuid::new_v4());
        let mk = |lang| CreateVocabulary {
            word: word.clone(),
            meaning: "meaning".into(),
            tenses: None,
            phonetic: None,
            tags: None,
            lang,
            platform: Platform::Main,
            display_order: None,
        };
        let first = create_vocabulary(&db, mk(Lang::En), "tester").await.expect("first create");

        let dup = create_vocabulary(&db, mk(Lang::En), "tester").await;
        assert!(matches!(dup, Err(ServiceError::Conflict(_))));

        // Same word under a different language is fine
        let other = create_vocabulary(&db, mk(Lang::Zh), "tester").await.expect("other lang");

        let storage = StorageEngine::new(std::env::temp_dir().join("cms-vocab-test"), 1600, 1024);
        delete_vocabulary_permanently(&db, &storage, first.id).await.expect("cleanup 1");
        delete_vocabulary_permanently(&db, &storage, other.id).await.expect("cleanup 2");
    }
}
