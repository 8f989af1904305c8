//! Server application core modules.
//!
//! This module contains all server-side functionality for Enzonic Games: HTTP routing, account
//! sessions, database access, media storage for uploaded games and thumbnails, and the services
//! enforcing ownership and the reaction/favorite/comment rules.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod media;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
