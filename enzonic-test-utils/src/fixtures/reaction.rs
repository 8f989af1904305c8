use chrono::Utc;
use entity::game_reaction::ReactionKind;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::GameReactionModel, TestContext};

impl TestContext {
    pub fn reaction<'a>(&'a self) -> ReactionFixtures<'a> {
        ReactionFixtures { setup: self }
    }
}

pub struct ReactionFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> ReactionFixtures<'a> {
    pub async fn insert_reaction(
        &self,
        user_id: i32,
        game_id: i32,
        kind: ReactionKind,
    ) -> Result<GameReactionModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::GameReaction::insert(entity::game_reaction::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                game_id: ActiveValue::Set(game_id),
                kind: ActiveValue::Set(kind),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
