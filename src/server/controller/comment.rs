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
        comment::{CommentDto, NewCommentDto},
    },
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::comment::CommentService,
    },
};

pub static COMMENT_TAG: &str = "comment";

/// Comments on a game, newest first
#[utoipa::path(
    get,
    path = "/api/games/{id}/comments",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Game ID")),
    responses(
        (status = 200, description = "Comments, newest first", body = Vec<CommentDto>),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comments(
    State(state): State<AppState>,
    Path(game_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let comments = CommentService::new(&state.db).list(game_id).await?;

    Ok((StatusCode::OK, Json(comments)))
}

/// Comment on a game
#[utoipa::path(
    post,
    path = "/api/games/{id}/comments",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Game ID")),
    request_body = NewCommentDto,
    responses(
        (status = 201, description = "Comment created", body = CommentDto),
        (status = 400, description = "Empty or overlong comment", body = ErrorDto),
        (status = 401, description = "Sign in required", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    session: Session,
    Path(game_id): Path<i32>,
    Json(request): Json<NewCommentDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let comment = CommentService::new(&state.db)
        .create(user.id, game_id, &request.content)
        .await?;

    Ok((StatusCode::CREATED, Json(comment)))
}

/// Delete one of the user's own comments
#[utoipa::path(
    delete,
    path = "/api/comments/{id}",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment ID")),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 401, description = "Sign in required", body = ErrorDto),
        (status = 403, description = "Not the author of this comment", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    session: Session,
    Path(comment_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    CommentService::new(&state.db)
        .delete(user.id, comment_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
