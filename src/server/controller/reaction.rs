use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        reaction::{FavoriteDto, ReactionDto, ReactionSummaryDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::app::AppState,
        service::{favorite::FavoriteService, reaction::ReactionService},
    },
};

pub static REACTION_TAG: &str = "reaction";

/// Like or dislike a game
///
/// Sending the reaction the user already has removes it; sending the other one switches it.
#[utoipa::path(
    put,
    path = "/api/games/{id}/reaction",
    tag = REACTION_TAG,
    params(("id" = i32, Path, description = "Game ID")),
    request_body = ReactionDto,
    responses(
        (status = 200, description = "Reaction totals after the change", body = ReactionSummaryDto),
        (status = 401, description = "Sign in required", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn react(
    State(state): State<AppState>,
    session: Session,
    Path(game_id): Path<i32>,
    Json(request): Json<ReactionDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let summary = ReactionService::new(&state.db)
        .react(user.id, game_id, request.kind)
        .await?;

    Ok((StatusCode::OK, Json(summary)))
}

/// Add a game to or remove it from the user's favorites
#[utoipa::path(
    put,
    path = "/api/games/{id}/favorite",
    tag = REACTION_TAG,
    params(("id" = i32, Path, description = "Game ID")),
    responses(
        (status = 200, description = "Favorite state after the toggle", body = FavoriteDto),
        (status = 401, description = "Sign in required", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_favorite(
    State(state): State<AppState>,
    session: Session,
    Path(game_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let favorite = FavoriteService::new(&state.db)
        .toggle(user.id, game_id)
        .await?;

    Ok((StatusCode::OK, Json(favorite)))
}
