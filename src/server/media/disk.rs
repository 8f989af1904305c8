use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::server::{error::media::MediaError, media::MediaBackend};

/// Stores media as plain files under a root directory.
#[derive(Clone)]
pub struct DiskMediaBackend {
    root: PathBuf,
}

impl DiskMediaBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn io_error(path: &str, source: std::io::Error) -> MediaError {
        MediaError::Io {
            path: path.to_string(),
            source,
        }
    }
}

#[async_trait]
impl MediaBackend for DiskMediaBackend {
    async fn put(&self, path: &str, data: Vec<u8>) -> Result<(), MediaError> {
        let file_path = self.root.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| Self::io_error(path, e))?;
        }

        fs::write(&file_path, data)
            .await
            .map_err(|e| Self::io_error(path, e))
    }

    async fn delete(&self, path: &str) -> Result<(), MediaError> {
        match fs::remove_file(self.root.join(path)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::io_error(path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_nested_directories() -> Result<(), MediaError> {
        let dir = tempfile::tempdir().unwrap();
        let backend = DiskMediaBackend::new(dir.path().to_path_buf());

        backend.put("12/thumbnail.webp", b"img".to_vec()).await?;

        assert!(dir.path().join("12").is_dir());
        assert!(dir.path().join("12/thumbnail.webp").is_file());

        Ok(())
    }

    #[tokio::test]
    async fn deleting_missing_file_succeeds() -> Result<(), MediaError> {
        let dir = tempfile::tempdir().unwrap();
        let backend = DiskMediaBackend::new(dir.path().to_path_buf());

        backend.delete("never/uploaded.png").await?;

        Ok(())
    }
}
