//! Server application models and type definitions.
//!
//! Application state, database model aliases with their DTO conversions, typed session values,
//! and parsed upload forms.

pub mod app;
pub mod db;
pub mod session;
pub mod upload;
