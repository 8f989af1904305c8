//! SeaORM entities for the Enzonic database schema.
//!
//! Each module maps one table created by the `migration` crate. Relations declare cascading
//! deletes from games and users to the rows that reference them.

pub mod prelude;

pub mod comment;
pub mod game;
pub mod game_favorite;
pub mod game_reaction;
pub mod user;
