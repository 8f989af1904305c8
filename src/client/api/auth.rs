use crate::{
    client::api::ApiError,
    model::user::{LoginDto, RegisterDto, UserDto},
};

/// The signed in user, `None` when the session is anonymous.
#[cfg(feature = "web")]
pub async fn get_user() -> Result<Option<UserDto>, ApiError> {
    use crate::client::api::http;

    let response = http::send(http::get("/api/auth/user")).await?;

    if response.status() == 404 {
        return Ok(None);
    }

    http::decode(response).await.map(Some)
}

#[cfg(feature = "web")]
pub async fn login(request: &LoginDto) -> Result<UserDto, ApiError> {
    use crate::client::api::http;

    let response = http::send(http::post_json("/api/auth/login", request)?).await?;

    http::decode(response).await
}

#[cfg(feature = "web")]
pub async fn register(request: &RegisterDto) -> Result<UserDto, ApiError> {
    use crate::client::api::http;

    let response = http::send(http::post_json("/api/auth/register", request)?).await?;

    http::decode(response).await
}

/// Clear the server session. The redirect to `/` is followed and ignored.
#[cfg(feature = "web")]
pub async fn logout() -> Result<(), ApiError> {
    use crate::client::api::http;

    let response = http::send(http::get("/api/auth/logout")).await?;

    http::expect_ok(response).await
}

#[cfg(not(feature = "web"))]
pub async fn get_user() -> Result<Option<UserDto>, ApiError> {
    crate::client::api::unavailable()
}

#[cfg(not(feature = "web"))]
pub async fn login(_request: &LoginDto) -> Result<UserDto, ApiError> {
    crate::client::api::unavailable()
}

#[cfg(not(feature = "web"))]
pub async fn register(_request: &RegisterDto) -> Result<UserDto, ApiError> {
    crate::client::api::unavailable()
}

#[cfg(not(feature = "web"))]
pub async fn logout() -> Result<(), ApiError> {
    crate::client::api::unavailable()
}
