use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::CommentModel, TestContext};

impl TestContext {
    pub fn comment<'a>(&'a self) -> CommentFixtures<'a> {
        CommentFixtures { setup: self }
    }
}

pub struct CommentFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CommentFixtures<'a> {
    pub async fn insert_comment(
        &self,
        user_id: i32,
        game_id: i32,
        content: &str,
    ) -> Result<CommentModel, TestError> {
        self.insert_comment_at(user_id, game_id, content, Utc::now().naive_utc())
            .await
    }

    /// Insert a comment with an explicit creation time, for ordering tests.
    pub async fn insert_comment_at(
        &self,
        user_id: i32,
        game_id: i32,
        content: &str,
        created_at: NaiveDateTime,
    ) -> Result<CommentModel, TestError> {
        Ok(
            entity::prelude::Comment::insert(entity::comment::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                game_id: ActiveValue::Set(game_id),
                content: ActiveValue::Set(content.to_string()),
                created_at: ActiveValue::Set(created_at),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
