use axum::{
    body::to_bytes,
    response::{IntoResponse, Redirect, Response},
};

use crate::{model::api::ErrorDto, server::error::Error};

/// Error bodies are small JSON documents
const MAX_ERROR_BODY: usize = 64 * 1024;

/// Send a failed form post back to `page` instead of showing a raw error response.
///
/// The error's status and [`ErrorDto`] message travel as the `status` and `error` query
/// parameters so the page can show them as a notification.
pub async fn redirect_with_error(page: &str, err: Error) -> Response {
    let response = err.into_response();
    let status = response.status();

    let message = to_bytes(response.into_body(), MAX_ERROR_BODY)
        .await
        .ok()
        .and_then(|body| serde_json::from_slice::<ErrorDto>(&body).ok())
        .map(|dto| dto.error)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Request failed").to_string());

    Redirect::to(&format!(
        "{}?error={}&status={}",
        page,
        urlencoding::encode(&message),
        status.as_u16()
    ))
    .into_response()
}
