//! Blob storage for uploaded game files and thumbnails.
//!
//! Files are addressed by a relative path such as `games/4f1c0a9e2b7d3c11.sb3` or
//! `12/thumbnail.png`. [`MediaStore`] turns those paths into public URLs under the configured
//! prefix, and the router serves the disk backend's directory at that prefix.

pub mod disk;

use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;

use crate::server::{error::media::MediaError, media::disk::DiskMediaBackend};

/// Storage backend for media blobs.
#[async_trait]
pub trait MediaBackend: Send + Sync {
    /// Store `data` at `path`, replacing any existing blob.
    async fn put(&self, path: &str, data: Vec<u8>) -> Result<(), MediaError>;

    /// Delete the blob at `path`. Missing blobs are not an error.
    async fn delete(&self, path: &str) -> Result<(), MediaError>;
}

/// Media storage shared through the application state.
#[derive(Clone)]
pub struct MediaStore {
    backend: Arc<dyn MediaBackend>,
    url_prefix: String,
}

impl MediaStore {
    pub fn new(backend: Arc<dyn MediaBackend>, url_prefix: impl Into<String>) -> Self {
        Self {
            backend,
            url_prefix: url_prefix.into().trim_end_matches('/').to_string(),
        }
    }

    /// Media store writing to `root` on the local disk.
    pub fn disk(root: PathBuf, url_prefix: impl Into<String>) -> Self {
        Self::new(Arc::new(DiskMediaBackend::new(root)), url_prefix)
    }

    /// Store `data` at `path` and return its public URL.
    ///
    /// Uploading to an existing path replaces the previous file.
    pub async fn upload(&self, path: &str, data: Vec<u8>) -> Result<String, MediaError> {
        validate_path(path)?;
        self.backend.put(path, data).await?;

        Ok(self.url_for(path))
    }

    /// Delete the blob behind a URL previously returned by [`MediaStore::upload`].
    ///
    /// URLs outside the media prefix (external links) are left alone.
    pub async fn delete_url(&self, url: &str) -> Result<(), MediaError> {
        let Some(path) = self.path_for(url) else {
            return Ok(());
        };

        validate_path(path)?;
        self.backend.delete(path).await
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.url_prefix, path)
    }

    /// Relative media path of a URL served by this store.
    pub fn path_for<'a>(&self, url: &'a str) -> Option<&'a str> {
        url.strip_prefix(self.url_prefix.as_str())?.strip_prefix('/')
    }
}

/// Path for a newly uploaded game file with the given extension.
pub fn game_file_path(extension: &str) -> String {
    format!("games/{:016x}.{}", rand::random::<u64>(), extension)
}

/// Path for a game's thumbnail. A game only ever has one thumbnail per extension.
pub fn thumbnail_path(game_id: i32, extension: &str) -> String {
    format!("{}/thumbnail.{}", game_id, extension)
}

fn validate_path(path: &str) -> Result<(), MediaError> {
    let escapes = path.is_empty()
        || path.starts_with('/')
        || path.contains('\\')
        || path.split('/').any(|segment| segment.is_empty() || segment == "..");

    if escapes {
        return Err(MediaError::InvalidPath(path.to_string()));
    }

    Ok(())
}
