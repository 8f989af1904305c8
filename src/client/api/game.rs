use crate::{
    client::api::ApiError,
    model::game::{GameDetailDto, GameDto},
};

/// Form action for uploading a game.
pub const UPLOAD_ACTION: &str = "/api/games";

/// Form action for editing a game.
pub fn edit_action(game_id: i32) -> String {
    format!("/api/games/{}", game_id)
}

#[cfg(feature = "web")]
pub async fn get_games() -> Result<Vec<GameDto>, ApiError> {
    use crate::client::api::http;

    let response = http::send(http::get("/api/games")).await?;

    http::decode(response).await
}

#[cfg(feature = "web")]
pub async fn get_game(game_id: i32) -> Result<GameDetailDto, ApiError> {
    use crate::client::api::http;

    let response = http::send(http::get(&format!("/api/games/{}", game_id))).await?;

    http::decode(response).await
}

#[cfg(feature = "web")]
pub async fn delete_game(game_id: i32) -> Result<(), ApiError> {
    use crate::client::api::http;

    let response = http::send(http::delete(&format!("/api/games/{}", game_id))).await?;

    http::expect_ok(response).await
}

#[cfg(not(feature = "web"))]
pub async fn get_games() -> Result<Vec<GameDto>, ApiError> {
    crate::client::api::unavailable()
}

#[cfg(not(feature = "web"))]
pub async fn get_game(_game_id: i32) -> Result<GameDetailDto, ApiError> {
    crate::client::api::unavailable()
}

#[cfg(not(feature = "web"))]
pub async fn delete_game(_game_id: i32) -> Result<(), ApiError> {
    crate::client::api::unavailable()
}
