use std::path::PathBuf;

use sea_orm::DatabaseConnection;

use crate::server::media::MediaStore;

/// URL prefix media is served under when no configuration is available.
pub const DEFAULT_MEDIA_URL_PREFIX: &str = "/media";

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub media: MediaStore,
}

/// State backed by a disk media store rooted at the provided directory.
impl From<(DatabaseConnection, PathBuf)> for AppState {
    fn from((db, media_dir): (DatabaseConnection, PathBuf)) -> Self {
        Self {
            db,
            media: MediaStore::disk(media_dir, DEFAULT_MEDIA_URL_PREFIX),
        }
    }
}
