//! Placeholder values shared by fixtures and tests.

/// Email of the first user created by [`TestBuilder::with_user`](crate::TestBuilder::with_user)
/// style fixtures.
pub static TEST_EMAIL: &str = "player@enzonic.test";

/// Email for a second, unrelated user when a test needs an owner and a stranger.
pub static TEST_OTHER_EMAIL: &str = "stranger@enzonic.test";

/// Stored password hash for fixture users.
///
/// Not a valid argon2 hash. Tests that sign in register through the auth service instead.
pub static TEST_PASSWORD_HASH: &str = "not-a-real-hash";

/// Media URL stored on fixture games.
pub static TEST_MEDIA_URL: &str = "https://games.enzonic.test/play";
