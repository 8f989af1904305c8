use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::{IntoParams, ToSchema};

use crate::{
    model::{
        api::ErrorDto,
        game::{GameDetailDto, GameDto, MediaKind},
    },
    server::{
        controller::util::{
            form::redirect_with_error,
            get_user::get_user_from_session,
            multipart::{parse_game_edit, parse_game_upload},
        },
        error::Error,
        model::{app::AppState, session::user::SessionUserId},
        service::game::GameService,
    },
};

pub static GAME_TAG: &str = "game";

#[derive(Deserialize, IntoParams)]
pub struct SearchParams {
    /// Case-insensitive term matched against titles and descriptions
    pub search: Option<String>,
}

/// Multipart fields accepted when uploading a game
#[allow(dead_code)]
#[derive(ToSchema)]
pub struct GameUploadForm {
    title: String,
    description: String,
    media_kind: MediaKind,
    /// External URL, used when no file is attached
    media_url: Option<String>,
    /// `.sb3`, `.html` or `.zip`
    #[schema(value_type = Option<String>, format = Binary)]
    file: Option<Vec<u8>>,
    #[schema(value_type = Option<String>, format = Binary)]
    thumbnail: Option<Vec<u8>>,
}

/// Multipart fields accepted when editing a game
#[allow(dead_code)]
#[derive(ToSchema)]
pub struct GameEditForm {
    title: String,
    description: String,
    /// Replaces the current thumbnail when present
    #[schema(value_type = Option<String>, format = Binary)]
    thumbnail: Option<Vec<u8>>,
}

/// List games newest first
#[utoipa::path(
    get,
    path = "/api/games",
    tag = GAME_TAG,
    params(SearchParams),
    responses(
        (status = 200, description = "Games, newest first", body = Vec<GameDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_games(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, Error> {
    let games = GameService::new(&state.db, &state.media)
        .list(params.search.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(games)))
}

/// Get a game with its reaction totals and the viewer's favorite state
#[utoipa::path(
    get,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Game ID")),
    responses(
        (status = 200, description = "Game details", body = GameDetailDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game(
    State(state): State<AppState>,
    session: Session,
    Path(game_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let viewer_id = SessionUserId::get(&session).await?;

    let detail = GameService::new(&state.db, &state.media)
        .get_detail(game_id, viewer_id)
        .await?;

    Ok((StatusCode::OK, Json(detail)))
}

/// Upload a game
///
/// Submitted as a browser form, so every outcome is a redirect.
///
/// # Responses
/// - 303 (See Other): Game stored, redirect to its page
/// - 303 (See Other): Upload failed, redirect back to `/games/upload` with `error` and `status`
///   query parameters (400 invalid fields or file type, 401 not signed in, 500 storage error)
#[utoipa::path(
    post,
    path = "/api/games",
    tag = GAME_TAG,
    request_body(content = GameUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 303, description = "Redirect to the new game, or back to the upload form with `error` and `status` query parameters"),
    ),
)]
pub async fn create_game(
    State(state): State<AppState>,
    session: Session,
    multipart: Multipart,
) -> Response {
    let result = async {
        let user = get_user_from_session(&state, &session).await?;
        let upload = parse_game_upload(multipart).await?;

        GameService::new(&state.db, &state.media)
            .create(user.id, upload)
            .await
    }
    .await;

    match result {
        Ok(game) => Redirect::to(&format!("/games/{}", game.id)).into_response(),
        Err(err) => redirect_with_error("/games/upload", err).await,
    }
}

/// Edit a game's text and thumbnail
///
/// Submitted as a browser form, so every outcome is a redirect.
///
/// # Responses
/// - 303 (See Other): Game updated, redirect to its page
/// - 303 (See Other): Edit failed, redirect back to `/games/{id}/edit` with `error` and `status`
///   query parameters (400 invalid fields, 401 not signed in, 403 not the owner, 404 unknown
///   game, 500 storage error)
#[utoipa::path(
    post,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Game ID")),
    request_body(content = GameEditForm, content_type = "multipart/form-data"),
    responses(
        (status = 303, description = "Redirect to the game, or back to the edit form with `error` and `status` query parameters"),
    ),
)]
pub async fn update_game(
    State(state): State<AppState>,
    session: Session,
    Path(game_id): Path<i32>,
    multipart: Multipart,
) -> Response {
    let result = async {
        let user = get_user_from_session(&state, &session).await?;
        let edit = parse_game_edit(multipart).await?;

        GameService::new(&state.db, &state.media)
            .update(user.id, game_id, edit)
            .await
    }
    .await;

    match result {
        Ok(game) => Redirect::to(&format!("/games/{}", game.id)).into_response(),
        Err(err) => redirect_with_error(&format!("/games/{}/edit", game_id), err).await,
    }
}

/// Delete a game along with its comments, reactions, favorites and media
#[utoipa::path(
    delete,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Game ID")),
    responses(
        (status = 204, description = "Game deleted"),
        (status = 401, description = "Sign in required", body = ErrorDto),
        (status = 403, description = "Not the owner of this game", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_game(
    State(state): State<AppState>,
    session: Session,
    Path(game_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    GameService::new(&state.db, &state.media)
        .delete(user.id, game_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
