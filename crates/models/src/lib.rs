pub mod db;
pub mod enums;
pub mod errors;

pub mod app_setting;
pub mod article;
pub mod audio_track;
pub mod image_asset;
pub mod logo;
pub mod quiz_question;
pub mod video_clip;
pub mod vocabulary;
pub mod website;
