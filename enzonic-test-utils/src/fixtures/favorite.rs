use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::GameFavoriteModel, TestContext};

impl TestContext {
    pub fn favorite<'a>(&'a self) -> FavoriteFixtures<'a> {
        FavoriteFixtures { setup: self }
    }
}

pub struct FavoriteFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> FavoriteFixtures<'a> {
    pub async fn insert_favorite(
        &self,
        user_id: i32,
        game_id: i32,
    ) -> Result<GameFavoriteModel, TestError> {
        Ok(
            entity::prelude::GameFavorite::insert(entity::game_favorite::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                game_id: ActiveValue::Set(game_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
