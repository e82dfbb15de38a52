//! Media asset storage
//!
//! Project images live on disk under a media root; the database stores
//! relative paths like `projects/payment-system.png`.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Directory under the media root holding project images
const PROJECT_DIR: &str = "projects";

/// Get the default media root
pub fn default_media_root() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("folio").join("media")
    } else {
        PathBuf::from("media")
    }
}

/// On-disk store for project image assets
#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
}

impl MediaStore {
    /// Create a media store rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the media root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Store image bytes for a project, returning the relative media path
    ///
    /// The bytes must sniff as a supported image format. Filenames are
    /// uniquified on collision rather than overwritten.
    pub fn store_image(&self, filename: &str, bytes: &[u8]) -> Result<String> {
        let format = image::guess_format(bytes)
            .map_err(|_| Error::Media(format!("'{filename}' is not a recognized image")))?;

        let stem = sanitize_stem(filename);
        let extension = format.extensions_str().first().copied().unwrap_or("bin");
        let dir = self.root.join(PROJECT_DIR);
        fs::create_dir_all(&dir)?;

        let mut candidate = format!("{stem}.{extension}");
        let mut suffix = 1;
        while dir.join(&candidate).exists() {
            candidate = format!("{stem}-{suffix}.{extension}");
            suffix += 1;
        }

        fs::write(dir.join(&candidate), bytes)?;
        tracing::debug!(path = %candidate, "Stored media asset");
        Ok(format!("{PROJECT_DIR}/{candidate}"))
    }

    /// Read a stored asset, returning its bytes and MIME type
    pub fn read(&self, relative: &str) -> Result<(Vec<u8>, &'static str)> {
        let path = self.resolve(relative)?;
        let bytes =
            fs::read(&path).map_err(|_| Error::Media(format!("asset '{relative}' not found")))?;
        let mime = image::guess_format(&bytes)
            .map(|format| format.to_mime_type())
            .unwrap_or("application/octet-stream");
        Ok((bytes, mime))
    }

    /// Check whether an asset exists under the media root
    pub fn exists(&self, relative: &str) -> bool {
        self.resolve(relative).map(|p| p.exists()).unwrap_or(false)
    }

    /// Resolve a relative asset path, rejecting anything that escapes the root
    fn resolve(&self, relative: &str) -> Result<PathBuf> {
        let rel = Path::new(relative);
        let escapes = rel.is_absolute()
            || rel.components().any(|c| !matches!(c, Component::Normal(_)));
        if escapes {
            return Err(Error::Media(format!("invalid asset path '{relative}'")));
        }
        Ok(self.root.join(rel))
    }
}

/// Reduce a filename to a safe lowercase stem
fn sanitize_stem(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");

    let cleaned: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();

    if cleaned.is_empty() {
        "image".to_string()
    } else {
        cleaned
    }
}
