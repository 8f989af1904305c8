use crate::{client::api::ApiError, model::comment::CommentDto};

#[cfg(feature = "web")]
pub async fn get_comments(game_id: i32) -> Result<Vec<CommentDto>, ApiError> {
    use crate::client::api::http;

    let response = http::send(http::get(&format!("/api/games/{}/comments", game_id))).await?;

    http::decode(response).await
}

#[cfg(feature = "web")]
pub async fn create_comment(game_id: i32, content: &str) -> Result<CommentDto, ApiError> {
    use crate::{client::api::http, model::comment::NewCommentDto};

    let request = http::post_json(
        &format!("/api/games/{}/comments", game_id),
        &NewCommentDto {
            content: content.to_string(),
        },
    )?;

    http::decode(http::send(request).await?).await
}

#[cfg(feature = "web")]
pub async fn delete_comment(comment_id: i32) -> Result<(), ApiError> {
    use crate::client::api::http;

    let response = http::send(http::delete(&format!("/api/comments/{}", comment_id))).await?;

    http::expect_ok(response).await
}

#[cfg(not(feature = "web"))]
pub async fn get_comments(_game_id: i32) -> Result<Vec<CommentDto>, ApiError> {
    crate::client::api::unavailable()
}

#[cfg(not(feature = "web"))]
pub async fn create_comment(_game_id: i32, _content: &str) -> Result<CommentDto, ApiError> {
    crate::client::api::unavailable()
}

#[cfg(not(feature = "web"))]
pub async fn delete_comment(_comment_id: i32) -> Result<(), ApiError> {
    crate::client::api::unavailable()
}
