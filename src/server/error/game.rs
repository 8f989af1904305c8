use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Game ID {0} not found")]
    NotFound(i32),
    #[error("User ID {user_id} does not own game ID {game_id}")]
    NotOwner { user_id: i32, game_id: i32 },
}

impl IntoResponse for GameError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "Game not found".to_string(),
                }),
            )
                .into_response(),
            Self::NotOwner { user_id, game_id } => {
                tracing::debug!(user_id = %user_id, game_id = %game_id, "{}", self);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Only the owner can change this game".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
