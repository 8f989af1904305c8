use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 5000;
pub const MAX_COMMENT_LEN: usize = 2000;

/// Extensions accepted for uploaded game files.
pub const GAME_FILE_EXTENSIONS: [&str; 3] = ["sb3", "html", "zip"];

/// Extensions accepted for uploaded thumbnails.
pub const THUMBNAIL_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// Input rejected before it reaches the store.
///
/// Messages are shown to users verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Comment cannot be empty")]
    EmptyComment,
    #[error("Comment cannot be longer than {0} characters")]
    CommentTooLong(usize),
    #[error("Title is required")]
    EmptyTitle,
    #[error("Title cannot be longer than {0} characters")]
    TitleTooLong(usize),
    #[error("Description cannot be longer than {0} characters")]
    DescriptionTooLong(usize),
    #[error("Display name cannot be longer than {0} characters")]
    DisplayNameTooLong(usize),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),
    #[error("Upload a game file or provide a URL")]
    MissingMedia,
    #[error("Game URL must start with http:// or https://")]
    InvalidMediaUrl,
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),
    #[error("The upload is larger than the server accepts")]
    UploadTooLarge,
    #[error("Invalid form field: {0}")]
    InvalidField(String),
}

/// Lowercased extension of a file name, if it has one.
pub fn file_extension(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;

    if stem.is_empty() || ext.is_empty() {
        return None;
    }

    Some(ext.to_ascii_lowercase())
}

/// Extension of `file_name` if it is one of `allowed`.
pub fn allowed_extension(file_name: &str, allowed: &[&str]) -> Result<String, ValidationError> {
    match file_extension(file_name) {
        Some(ext) if allowed.contains(&ext.as_str()) => Ok(ext),
        _ => Err(ValidationError::UnsupportedFileType(file_name.to_string())),
    }
}
