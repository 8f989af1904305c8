//! Client state shared through context: session, query cache, notifications and the
//! optimistic reaction and favorite cells.

pub mod query;
pub mod reaction;
pub mod session;
pub mod toast;
