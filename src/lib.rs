//! Enzonic Games: a showcase where players browse, react to, discuss, and upload games.
//!
//! [`model`] holds the DTOs and validation shared by the Dioxus client and the server. The
//! [`server`] module is only compiled with the `server` feature.

pub mod model;

#[cfg(feature = "server")]
pub mod server;
