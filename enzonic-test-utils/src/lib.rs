//! Shared test harness for the Enzonic workspace.
//!
//! Tests describe their environment with [`TestBuilder`] and receive a [`TestContext`] holding an
//! in-memory SQLite database, a session backed by `MemoryStore`, and a temporary media directory.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_EMAIL, TEST_OTHER_EMAIL},
        TestBuilder, TestContext, TestError,
    };
}
