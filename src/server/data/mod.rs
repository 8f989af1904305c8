//! Data access layer repositories.
//!
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so services can run them against
//! either a pooled connection or an open transaction.

pub mod comment;
pub mod favorite;
pub mod game;
pub mod reaction;
pub mod user;
