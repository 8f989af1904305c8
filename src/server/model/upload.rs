//! Game forms as received from multipart uploads.

use crate::model::game::MediaKind;

/// File part of a multipart form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub data: Vec<u8>,
}

/// Fields of the upload form.
#[derive(Debug, Clone)]
pub struct GameUpload {
    pub title: String,
    pub description: String,
    pub media_kind: MediaKind,
    pub media_url: Option<String>,
    pub file: Option<UploadedFile>,
    pub thumbnail: Option<UploadedFile>,
}

/// Fields of the edit form. A missing thumbnail keeps the current one.
#[derive(Debug, Clone)]
pub struct GameEdit {
    pub title: String,
    pub description: String,
    pub thumbnail: Option<UploadedFile>,
}
