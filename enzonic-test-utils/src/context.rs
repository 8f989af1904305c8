//! Test context returned by [`TestBuilder::build`](crate::TestBuilder::build).

use std::{path::Path, path::PathBuf, sync::Arc};

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tempfile::TempDir;
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// Environment a test runs against.
///
/// ```ignore
/// let test = TestBuilder::new().with_game_tables().build().await?;
///
/// let user = test.user().insert_user(TEST_EMAIL).await?;
/// let game = test.game().insert_game(user.id, "Orbit").await?;
///
/// let state: AppState = test.to_app_state();
/// ```
pub struct TestContext {
    /// Connection to an in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session backed by an in-memory store
    pub session: Session,

    /// Media directory, removed when the context is dropped
    pub(crate) media_dir: TempDir,
}

impl TestContext {
    /// Convert the database connection and media directory into the application state.
    ///
    /// Keeps the test-utils crate free of a dependency on the main crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, PathBuf)>,
    {
        T::from((self.db.clone(), self.media_dir.path().to_path_buf()))
    }

    /// Root of the temporary media directory.
    pub fn media_path(&self) -> &Path {
        self.media_dir.path()
    }
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;
        let media_dir = tempfile::tempdir()?;

        Ok(TestContext {
            db,
            session,
            media_dir,
        })
    }

    /// Execute CREATE TABLE statements in order.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
