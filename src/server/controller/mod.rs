//! HTTP controller endpoints for the Enzonic web API.
//!
//! Controllers read the session, delegate to services, and convert results into responses.
//! Every handler is annotated with `#[utoipa::path]` so it appears in the generated OpenAPI
//! document.

pub mod auth;
pub mod comment;
pub mod game;
pub mod reaction;
pub mod util;
