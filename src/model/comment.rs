use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::{
    user::UserDto,
    validation::{ValidationError, MAX_COMMENT_LEN},
};

/// Author name shown for users without a display name.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CommentDto {
    pub id: i32,
    pub game_id: i32,
    pub user_id: i32,
    pub author_name: String,
    pub content: String,
    pub created_at: NaiveDateTime,
}

impl CommentDto {
    /// Only the author of a comment may delete it.
    pub fn can_delete(&self, viewer: Option<&UserDto>) -> bool {
        viewer.is_some_and(|user| user.id == self.user_id)
    }
}

/// Request body for posting a comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct NewCommentDto {
    pub content: String,
}

/// Trim comment content, rejecting empty or oversized comments.
pub fn validate_comment(content: &str) -> Result<String, ValidationError> {
    let content = content.trim();

    if content.is_empty() {
        return Err(ValidationError::EmptyComment);
    }

    if content.chars().count() > MAX_COMMENT_LEN {
        return Err(ValidationError::CommentTooLong(MAX_COMMENT_LEN));
    }

    Ok(content.to_string())
}

/// Author name for a comment given the author's optional display name.
pub fn author_name(display_name: Option<&str>) -> String {
    match display_name.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => ANONYMOUS_AUTHOR.to_string(),
    }
}
