use crate::{
    client::api::ApiError,
    model::reaction::{FavoriteDto, ReactionKind, ReactionSummaryDto},
};

#[cfg(feature = "web")]
pub async fn react(game_id: i32, kind: ReactionKind) -> Result<ReactionSummaryDto, ApiError> {
    use crate::{client::api::http, model::reaction::ReactionDto};

    let request = http::put_json(
        &format!("/api/games/{}/reaction", game_id),
        &ReactionDto { kind },
    )?;

    http::decode(http::send(request).await?).await
}

#[cfg(feature = "web")]
pub async fn toggle_favorite(game_id: i32) -> Result<FavoriteDto, ApiError> {
    use crate::client::api::http;

    let request = http::put(&format!("/api/games/{}/favorite", game_id));

    http::decode(http::send(request).await?).await
}

#[cfg(not(feature = "web"))]
pub async fn react(_game_id: i32, _kind: ReactionKind) -> Result<ReactionSummaryDto, ApiError> {
    crate::client::api::unavailable()
}

#[cfg(not(feature = "web"))]
pub async fn toggle_favorite(_game_id: i32) -> Result<FavoriteDto, ApiError> {
    crate::client::api::unavailable()
}
