//! Data transfer types shared by the client and the server.
//!
//! Everything here compiles for both targets. Pure rules that the client and server must agree
//! on (reaction resolution, ownership, comment validation) live next to the types they govern.

pub mod api;
pub mod comment;
pub mod game;
pub mod reaction;
pub mod user;
pub mod validation;
