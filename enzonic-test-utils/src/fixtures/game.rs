use chrono::Utc;
use entity::game::MediaKind;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_MEDIA_URL, error::TestError, model::GameModel, TestContext};

impl TestContext {
    pub fn game<'a>(&'a self) -> GameFixtures<'a> {
        GameFixtures { setup: self }
    }
}

pub struct GameFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> GameFixtures<'a> {
    /// Insert a linked game owned by `user_id` with a description derived from the title.
    pub async fn insert_game(&self, user_id: i32, title: &str) -> Result<GameModel, TestError> {
        self.insert_game_with_description(user_id, title, &format!("{title} description"))
            .await
    }

    pub async fn insert_game_with_description(
        &self,
        user_id: i32,
        title: &str,
        description: &str,
    ) -> Result<GameModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::Game::insert(entity::game::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            title: ActiveValue::Set(title.to_string()),
            description: ActiveValue::Set(description.to_string()),
            thumbnail_url: ActiveValue::Set(None),
            media_kind: ActiveValue::Set(MediaKind::Link),
            media_url: ActiveValue::Set(Some(TEST_MEDIA_URL.to_string())),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
