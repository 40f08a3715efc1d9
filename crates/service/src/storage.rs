//! Local-file storage engine shared by the media-bearing modules.
//!
//! Responsibilities: derive filesystem-safe names from titles, uploads or
//! URLs, dodge collisions with numeric suffixes, scale oversized raster
//! images down, and fetch remote files. DB consistency is the caller's
//! problem; file cleanup here is best-effort and never fails a request.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{GenericImageView, ImageOutputFormat};
use thiserror::Error;
use tokio::fs;
use tracing::{debug, warn};

use common::text::{short_uid, slugify, split_ext};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("download failed: {0}")]
    Download(String),
    #[error("download exceeds limit of {0} bytes")]
    TooLarge(u64),
}

/// Media category; each maps to one subdirectory under the storage root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Audio,
    Video,
    Logo,
    Cover,
}

impl MediaKind {
    pub const ALL: [MediaKind; 5] = [
        MediaKind::Image,
        MediaKind::Audio,
        MediaKind::Video,
        MediaKind::Logo,
        MediaKind::Cover,
    ];

    pub fn dir(self) -> &'static str {
        match self {
            MediaKind::Image => "images",
            MediaKind::Audio => "audio",
            MediaKind::Video => "video",
            MediaKind::Logo => "logos",
            MediaKind::Cover => "covers",
        }
    }
}

/// Result of a successful write.
#[derive(Clone, Debug)]
pub struct StoredFile {
    pub file_name: String,
    pub size_bytes: i64,
}

#[derive(Clone, Debug)]
pub struct StorageEngine {
    root: PathBuf,
    max_image_dimension: u32,
    max_download_bytes: u64,
}

impl StorageEngine {
    pub fn new(root: impl Into<PathBuf>, max_image_dimension: u32, max_download_bytes: u64) -> Self {
        Self { root: root.into(), max_image_dimension, max_download_bytes }
    }

    pub fn from_config(cfg: &configs::StorageConfig) -> Self {
        Self::new(&cfg.root, cfg.max_image_dimension, cfg.max_download_bytes)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the root and every per-kind subdirectory.
    pub async fn ensure_dirs(&self) -> Result<(), StorageError> {
        for kind in MediaKind::ALL {
            fs::create_dir_all(self.root.join(kind.dir())).await?;
        }
        Ok(())
    }

    pub fn path_of(&self, kind: MediaKind, file_name: &str) -> PathBuf {
        self.root.join(kind.dir()).join(file_name)
    }

    /// Derive a filesystem-safe file name from a desired one.
    ///
    /// The stem is slugified; when nothing survives (e.g. a fully non-ASCII
    /// title) a short random stem is used instead. The extension, if present,
    /// is lowercased and kept.
    pub fn safe_file_name(desired: &str) -> String {
        let (stem, ext) = split_ext(desired);
        let mut slug = slugify(stem);
        if slug.is_empty() {
            slug = short_uid();
        }
        match ext {
            Some(e) => format!("{}.{}", slug, e),
            None => slug,
        }
    }

    /// Find an unoccupied name by appending `-1`, `-2`, ... to the stem.
    /// Plain existence check before write; races are out of scope.
    async fn reserve(&self, kind: MediaKind, desired: &str) -> Result<(String, PathBuf), StorageError> {
        let safe = Self::safe_file_name(desired);
        let (stem, ext) = split_ext(&safe);
        let stem = stem.to_string();
        let mut attempt = 0u32;
        loop {
            let candidate = match (&ext, attempt) {
                (Some(e), 0) => format!("{}.{}", stem, e),
                (Some(e), n) => format!("{}-{}.{}", stem, n, e),
                (None, 0) => stem.clone(),
                (None, n) => format!("{}-{}", stem, n),
            };
            let path = self.path_of(kind, &candidate);
            if !fs::try_exists(&path).await? {
                return Ok((candidate, path));
            }
            attempt += 1;
        }
    }

    /// Write raw bytes under the kind's directory, collision-safe.
    pub async fn store(
        &self,
        kind: MediaKind,
        desired_name: &str,
        bytes: &[u8],
    ) -> Result<StoredFile, StorageError> {
        fs::create_dir_all(self.root.join(kind.dir())).await?;
        let (file_name, path) = self.reserve(kind, desired_name).await?;
        fs::write(&path, bytes).await?;
        debug!(kind = kind.dir(), file = %file_name, size = bytes.len(), "stored file");
        Ok(StoredFile { file_name, size_bytes: bytes.len() as i64 })
    }

    /// Store an image, scaling it down when either side exceeds the
    /// configured maximum. Undecodable payloads (SVG and friends) and
    /// formats we do not re-encode are stored verbatim.
    pub async fn store_image(
        &self,
        kind: MediaKind,
        desired_name: &str,
        bytes: &[u8],
    ) -> Result<StoredFile, StorageError> {
        let img = match image::load_from_memory(bytes) {
            Ok(img) => img,
            Err(e) => {
                debug!(name = desired_name, error = %e, "not a decodable raster image, storing raw");
                return self.store(kind, desired_name, bytes).await;
            }
        };
        let (w, h) = img.dimensions();
        let max = self.max_image_dimension;
        if w <= max && h <= max {
            return self.store(kind, desired_name, bytes).await;
        }

        let format = match split_ext(desired_name).1.as_deref() {
            Some("jpg") | Some("jpeg") => ImageOutputFormat::Jpeg(85),
            Some("png") => ImageOutputFormat::Png,
            // Keep exotic formats untouched rather than transcode them
            _ => return self.store(kind, desired_name, bytes).await,
        };

        let scale = max as f64 / w.max(h) as f64;
        let nw = ((w as f64 * scale) as u32).max(1);
        let nh = ((h as f64 * scale) as u32).max(1);
        let resized = img.resize(nw, nh, FilterType::Triangle);

        let mut buf = Cursor::new(Vec::new());
        if let Err(e) = resized.write_to(&mut buf, format) {
            warn!(name = desired_name, error = %e, "re-encode failed, storing raw bytes");
            return self.store(kind, desired_name, bytes).await;
        }
        let encoded = buf.into_inner();
        debug!(
            name = desired_name,
            from = format!("{}x{}", w, h),
            to = format!("{}x{}", nw, nh),
            "resized oversized image"
        );
        self.store(kind, desired_name, &encoded).await
    }

    /// Fetch a remote file. Returns the name suggested by the URL path and
    /// the body, rejecting bodies above the configured byte cap.
    pub async fn download(
        &self,
        client: &reqwest::Client,
        url: &str,
    ) -> Result<(String, Vec<u8>), StorageError> {
        let resp = client
            .get(url)
            .send()
            .await
            .map_err(|e| StorageError::Download(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(StorageError::Download(format!("{} from {}", resp.status(), url)));
        }
        if let Some(len) = resp.content_length() {
            if len > self.max_download_bytes {
                return Err(StorageError::TooLarge(self.max_download_bytes));
            }
        }
        let suggested = name_from_url(url);
        let body = resp
            .bytes()
            .await
            .map_err(|e| StorageError::Download(e.to_string()))?;
        if body.len() as u64 > self.max_download_bytes {
            return Err(StorageError::TooLarge(self.max_download_bytes));
        }
        Ok((suggested, body.to_vec()))
    }

    /// Collision-safe rename within a kind. Returns the final new name.
    pub async fn rename(
        &self,
        kind: MediaKind,
        old_name: &str,
        new_desired: &str,
    ) -> Result<String, StorageError> {
        let old_path = self.path_of(kind, old_name);
        let (new_name, new_path) = self.reserve(kind, new_desired).await?;
        fs::rename(&old_path, &new_path).await?;
        debug!(kind = kind.dir(), from = old_name, to = %new_name, "renamed file");
        Ok(new_name)
    }

    /// Best-effort removal; a missing file is not an error.
    pub async fn remove(&self, kind: MediaKind, file_name: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_of(kind, file_name)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Last path segment of a URL, query stripped; random stem when the URL
/// ends in a slash or has no path at all.
fn name_from_url(url: &str) -> String {
    let no_query = url.split(['?', '#']).next().unwrap_or(url);
    // Discard the scheme and authority so bare hosts produce no segment
    let after_scheme = no_query.split_once("://").map_or(no_query, |(_, rest)| rest);
    let segment = match after_scheme.split_once('/') {
        Some((_, path)) => path.rsplit('/').next().unwrap_or(""),
        None => "",
    };
    if segment.is_empty() {
        short_uid()
    } else {
        segment.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_engine(max_dim: u32) -> StorageEngine {
        let root = std::env::temp_dir().join(format!("cms-storage-test-{}", short_uid()));
        StorageEngine::new(root, max_dim, 1024 * 1024)
    }

    #[test]
    fn safe_file_name_slugifies_and_keeps_ext() {
        assert_eq!(StorageEngine::safe_file_name("My Photo.JPG"), "my-photo.jpg");
        assert_eq!(StorageEngine::safe_file_name("hello"), "hello");
        // Non-ASCII-only stems fall back to a random stem, extension kept
        let name = StorageEngine::safe_file_name("你好.png");
        assert!(name.ends_with(".png"));
        assert_eq!(name.len(), 12 + 4);
    }

    #[test]
    fn name_from_url_takes_last_segment() {
        assert_eq!(name_from_url("https://a.b/c/pic.png?x=1"), "pic.png");
        assert_eq!(name_from_url("https://a.b/c/pic.png#frag"), "pic.png");
        // Trailing slash and bare hosts produce a random stem
        assert_eq!(name_from_url("https://a.b/dir/").len(), 12);
        assert_eq!(name_from_url("https://a.b/").len(), 12);
        assert_eq!(name_from_url("https://a.b").len(), 12);
    }

    #[tokio::test]
    async fn store_appends_numeric_suffix_on_collision() {
        let engine = temp_engine(1600);
        engine.ensure_dirs().await.unwrap();
        let a = engine.store(MediaKind::Audio, "song.mp3", b"one").await.unwrap();
        let b = engine.store(MediaKind::Audio, "song.mp3", b"two").await.unwrap();
        let c = engine.store(MediaKind::Audio, "song.mp3", b"three").await.unwrap();
        assert_eq!(a.file_name, "song.mp3");
        assert_eq!(b.file_name, "song-1.mp3");
        assert_eq!(c.file_name, "song-2.mp3");
        // All three files coexist
        for f in [&a, &b, &c] {
            assert!(engine.path_of(MediaKind::Audio, &f.file_name).exists());
        }
    }

    #[tokio::test]
    async fn store_image_passes_small_and_raw_through() {
        let engine = temp_engine(1600);
        engine.ensure_dirs().await.unwrap();

        // Undecodable bytes are stored verbatim
        let svg = b"<svg xmlns='http://www.w3.org/2000/svg'/>";
        let stored = engine.store_image(MediaKind::Logo, "mark.svg", svg).await.unwrap();
        let on_disk = std::fs::read(engine.path_of(MediaKind::Logo, &stored.file_name)).unwrap();
        assert_eq!(on_disk, svg);
        assert_eq!(stored.size_bytes, svg.len() as i64);
    }

    #[tokio::test]
    async fn store_image_bounds_oversized_dimensions() {
        let engine = temp_engine(64);
        engine.ensure_dirs().await.unwrap();

        let img = image::DynamicImage::ImageRgba8(image::RgbaImage::new(256, 128));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageOutputFormat::Png).unwrap();

        let stored = engine
            .store_image(MediaKind::Image, "big.png", &buf.into_inner())
            .await
            .unwrap();
        let reread = image::open(engine.path_of(MediaKind::Image, &stored.file_name)).unwrap();
        let (w, h) = reread.dimensions();
        assert!(w <= 64 && h <= 64);
        // Aspect ratio survives the resize
        assert_eq!(w, 64);
        assert_eq!(h, 32);
    }

    #[tokio::test]
    async fn rename_is_collision_safe() {
        let engine = temp_engine(1600);
        engine.ensure_dirs().await.unwrap();
        engine.store(MediaKind::Video, "clip.mp4", b"a").await.unwrap();
        engine.store(MediaKind::Video, "taken.mp4", b"b").await.unwrap();

        let renamed = engine
            .rename(MediaKind::Video, "clip.mp4", "taken.mp4")
            .await
            .unwrap();
        assert_eq!(renamed, "taken-1.mp4");
        assert!(!engine.path_of(MediaKind::Video, "clip.mp4").exists());
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let engine = temp_engine(1600);
        engine.ensure_dirs().await.unwrap();
        let f = engine.store(MediaKind::Image, "gone.png", b"x").await.unwrap();
        engine.remove(MediaKind::Image, &f.file_name).await.unwrap();
        // Second removal of a missing file is fine
        engine.remove(MediaKind::Image, &f.file_name).await.unwrap();
    }
}
