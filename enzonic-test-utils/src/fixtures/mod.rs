//! Fixture helpers inserting rows directly through sea-orm.
//!
//! Each accessor on [`TestContext`](crate::TestContext) returns a small borrowing struct so tests
//! read as `test.game().insert_game(user.id, "Orbit")`.

pub mod comment;
pub mod favorite;
pub mod game;
pub mod reaction;
pub mod user;
