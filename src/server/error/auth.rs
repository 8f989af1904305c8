use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("An account with this email already exists")]
    EmailTaken,
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),
}

impl AuthError {
    fn response(status: StatusCode, message: &str) -> Response {
        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", self);

                Self::response(StatusCode::UNAUTHORIZED, "Sign in required")
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(
                    user_id = %user_id,
                    "{}",
                    self
                );

                Self::response(StatusCode::UNAUTHORIZED, "Sign in required")
            }
            Self::InvalidCredentials => {
                tracing::debug!("{}", self);

                Self::response(StatusCode::UNAUTHORIZED, "Invalid email or password")
            }
            Self::EmailTaken => Self::response(StatusCode::CONFLICT, &self.to_string()),
            Self::PasswordHash(_) => InternalServerError(self).into_response(),
        }
    }
}
