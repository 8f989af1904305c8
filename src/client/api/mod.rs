//! Request functions for the Enzonic HTTP API.
//!
//! Requests are only issued from the browser build. Other builds return
//! [`ApiError::RemoteFailure`] so server side rendering never blocks on the network.

pub mod auth;
pub mod comment;
pub mod game;
pub mod reaction;

use thiserror::Error;

/// Failure of an API request, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Sign in to do that")]
    Unauthenticated,
    #[error("You can only change your own games and comments")]
    Unauthorized,
    #[error("{0}")]
    Validation(String),
    #[error("It may have been deleted")]
    NotFound,
    #[error("{0}")]
    RemoteFailure(String),
}

impl ApiError {
    /// Classify an error response by status code and its `ErrorDto` message.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            401 => Self::Unauthenticated,
            403 => Self::Unauthorized,
            404 => Self::NotFound,
            400 | 409 | 413 | 422 => Self::Validation(
                message.unwrap_or_else(|| "The request was rejected".to_string()),
            ),
            _ => Self::RemoteFailure(
                message.unwrap_or_else(|| format!("Request failed with status {}", status)),
            ),
        }
    }

    /// Short heading for a notification about this error.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "Sign in required",
            Self::Unauthorized => "Unauthorized",
            Self::Validation(_) => "Check your input",
            Self::NotFound => "Not found",
            Self::RemoteFailure(_) => "Something went wrong",
        }
    }
}

#[cfg(feature = "web")]
pub(crate) mod http {
    use reqwasm::http::{Request, RequestCredentials, Response};
    use serde::{de::DeserializeOwned, Serialize};

    use super::ApiError;
    use crate::model::api::ErrorDto;

    pub fn get(url: &str) -> Request {
        Request::get(url).credentials(RequestCredentials::Include)
    }

    pub fn delete(url: &str) -> Request {
        Request::delete(url).credentials(RequestCredentials::Include)
    }

    pub fn put(url: &str) -> Request {
        Request::put(url).credentials(RequestCredentials::Include)
    }

    pub fn post_json<B: Serialize>(url: &str, body: &B) -> Result<Request, ApiError> {
        with_json(Request::post(url), body)
    }

    pub fn put_json<B: Serialize>(url: &str, body: &B) -> Result<Request, ApiError> {
        with_json(Request::put(url), body)
    }

    fn with_json<B: Serialize>(request: Request, body: &B) -> Result<Request, ApiError> {
        let body = serde_json::to_string(body)
            .map_err(|e| ApiError::RemoteFailure(format!("Failed to encode request: {}", e)))?;

        Ok(request
            .credentials(RequestCredentials::Include)
            .header("Content-Type", "application/json")
            .body(body))
    }

    pub async fn send(request: Request) -> Result<Response, ApiError> {
        request
            .send()
            .await
            .map_err(|e| ApiError::RemoteFailure(format!("Failed to send request: {}", e)))
    }

    /// Decode a successful response body, or map an error response to [`ApiError`].
    pub async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !(200..300).contains(&response.status()) {
            return Err(error_from(response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::RemoteFailure(format!("Failed to parse response: {}", e)))
    }

    /// Expect an empty success response.
    pub async fn expect_ok(response: Response) -> Result<(), ApiError> {
        if (200..300).contains(&response.status()) {
            Ok(())
        } else {
            Err(error_from(response).await)
        }
    }

    pub async fn error_from(response: Response) -> ApiError {
        let message = response.json::<ErrorDto>().await.ok().map(|dto| dto.error);

        ApiError::from_status(response.status(), message)
    }
}

#[cfg(not(feature = "web"))]
pub(crate) fn unavailable<T>() -> Result<T, ApiError> {
    Err(ApiError::RemoteFailure(
        "Requests can only be made from the browser".to_string(),
    ))
}
