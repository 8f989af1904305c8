use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum CommentError {
    #[error("Comment ID {0} not found")]
    NotFound(i32),
    #[error("User ID {user_id} does not own comment ID {comment_id}")]
    NotOwner { user_id: i32, comment_id: i32 },
}

impl IntoResponse for CommentError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "Comment not found".to_string(),
                }),
            )
                .into_response(),
            Self::NotOwner {
                user_id,
                comment_id,
            } => {
                tracing::debug!(user_id = %user_id, comment_id = %comment_id, "{}", self);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You can only delete your own comments".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
