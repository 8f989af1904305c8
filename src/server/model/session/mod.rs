//! Typed session values stored through tower-sessions.

pub mod user;
