use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

#[derive(Error, Debug)]
pub enum MediaError {
    #[error("Media path {0:?} escapes the media root")]
    InvalidPath(String),
    #[error("Failed to access media at {path:?}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl IntoResponse for MediaError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
