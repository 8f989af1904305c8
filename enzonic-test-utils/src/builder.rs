//! Declarative test setup.
//!
//! Configuration methods only queue work. Tables and fixtures are created when
//! [`TestBuilder::build`] runs.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for a [`TestContext`].
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_game_tables: bool,

    users: Vec<String>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_game_tables: false,
            users: Vec::new(),
        }
    }

    /// Create every table of the schema: users, games, reactions, favorites and comments.
    pub fn with_game_tables(mut self) -> Self {
        self.include_game_tables = true;
        self
    }

    /// Create the table for a single entity.
    ///
    /// Tables are created in the order they are added so parents must come before children.
    ///
    /// ```no_run
    /// use enzonic_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), enzonic_test_utils::TestError> {
    /// let test = TestBuilder::new().with_table(User).with_table(Game).build().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with the provided email during `build()`.
    ///
    /// Users receive ids in insertion order starting at 1.
    pub fn with_user(mut self, email: impl Into<String>) -> Self {
        self.users.push(email.into());
        self
    }

    /// Create the configured tables, then insert queued fixtures.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_game_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Game),
                schema.create_table_from_entity(entity::prelude::GameReaction),
                schema.create_table_from_entity(entity::prelude::GameFavorite),
                schema.create_table_from_entity(entity::prelude::Comment),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert fixtures
        for email in self.users {
            setup.user().insert_user(&email).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn builder_creates_game_tables() {
        let result = TestBuilder::new().with_game_tables().build().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn builder_inserts_queued_users() -> Result<(), TestError> {
        use sea_orm::PaginatorTrait;

        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .with_user("a@enzonic.test")
            .with_user("b@enzonic.test")
            .build()
            .await?;

        let count = entity::prelude::User::find().count(&test.db).await?;
        assert_eq!(count, 2);

        Ok(())
    }
}
