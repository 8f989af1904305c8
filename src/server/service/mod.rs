//! Service layer for business logic.
//!
//! Services validate input, enforce ownership, and coordinate repositories. Operations that
//! touch several tables run inside a single transaction.

pub mod auth;
pub mod comment;
pub mod favorite;
pub mod game;
pub mod reaction;
pub mod user;
