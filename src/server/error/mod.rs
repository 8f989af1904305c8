//! Error types for the Enzonic server.
//!
//! Each domain has its own `thiserror` enum with an `IntoResponse` implementation mapping it to
//! an HTTP status and an [`ErrorDto`] body. [`Error`] aggregates them so handlers can use `?`
//! throughout.

pub mod auth;
pub mod comment;
pub mod config;
pub mod game;
pub mod media;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::{api::ErrorDto, validation::ValidationError},
    server::error::{
        auth::AuthError, comment::CommentError, config::ConfigError, game::GameError,
        media::MediaError,
    },
};

/// Main error type for the Enzonic server.
///
/// Domain errors keep their own status codes. Library errors (database, session store, media
/// storage) are reported as a generic 500 after being logged.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or invalid environment variables.
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Session, credential and account errors.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Game lookup and ownership errors.
    #[error(transparent)]
    GameError(#[from] GameError),
    /// Comment lookup and ownership errors.
    #[error(transparent)]
    CommentError(#[from] CommentError),
    /// Rejected user input.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Blob storage failure.
    #[error(transparent)]
    MediaError(#[from] MediaError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::GameError(err) => err.into_response(),
            Self::CommentError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::MediaError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// The error is logged in full while the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
