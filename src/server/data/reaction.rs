use chrono::Utc;
use entity::game_reaction::ReactionKind;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::server::model::db::GameReactionModel;

pub struct ReactionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReactionRepository<'a, C> {
    /// Creates a new instance of [`ReactionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(
        &self,
        user_id: i32,
        game_id: i32,
    ) -> Result<Option<GameReactionModel>, DbErr> {
        entity::prelude::GameReaction::find_by_id((user_id, game_id))
            .one(self.db)
            .await
    }

    /// Store `kind` as the user's reaction, overwriting any existing reaction for the game.
    ///
    /// Concurrent inserts for the same `(user_id, game_id)` collapse into one row.
    pub async fn upsert(&self, user_id: i32, game_id: i32, kind: ReactionKind) -> Result<(), DbErr> {
        let now = Utc::now().naive_utc();

        let reaction = entity::game_reaction::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            game_id: ActiveValue::Set(game_id),
            kind: ActiveValue::Set(kind),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        entity::prelude::GameReaction::insert(reaction)
            .on_conflict(
                OnConflict::columns([
                    entity::game_reaction::Column::UserId,
                    entity::game_reaction::Column::GameId,
                ])
                .update_columns([
                    entity::game_reaction::Column::Kind,
                    entity::game_reaction::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, user_id: i32, game_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::GameReaction::delete_by_id((user_id, game_id))
            .exec(self.db)
            .await
    }

    pub async fn delete_by_game(&self, game_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::GameReaction::delete_many()
            .filter(entity::game_reaction::Column::GameId.eq(game_id))
            .exec(self.db)
            .await
    }

    /// Number of reactions of `kind` for a game.
    pub async fn count(&self, game_id: i32, kind: ReactionKind) -> Result<u64, DbErr> {
        entity::prelude::GameReaction::find()
            .filter(entity::game_reaction::Column::GameId.eq(game_id))
            .filter(entity::game_reaction::Column::Kind.eq(kind))
            .count(self.db)
            .await
    }
}
