//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Hosts the shared local-file storage engine used by the media modules.

pub mod errors;
pub mod pagination;
pub mod storage;
#[cfg(test)]
pub mod test_support;

pub mod article_service;
pub mod audio_service;
pub mod image_service;
pub mod logo_service;
pub mod quiz_service;
pub mod setting_service;
pub mod video_service;
pub mod vocabulary_service;
pub mod website_service;

use models::enums::{Lang, Platform};

/// Common list filter accepted by every module's `list` operation.
#[derive(Clone, Debug, Default)]
pub struct ListFilter {
    pub lang: Option<Lang>,
    pub platform: Option<Platform>,
    /// Substring match against the comma-separated tags column.
    pub tag: Option<String>,
    /// Substring match against the module's name-ish field.
    pub q: Option<String>,
    /// Soft-deleted rows are hidden unless this is set.
    pub include_inactive: bool,
}
