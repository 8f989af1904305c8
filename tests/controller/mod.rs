//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, using an in-memory database, a memory
//! backed session and a temporary media directory.

mod auth;
mod comment;
mod game;
mod reaction;
