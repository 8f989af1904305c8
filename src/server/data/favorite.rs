use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::server::model::db::GameFavoriteModel;

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(
        &self,
        user_id: i32,
        game_id: i32,
    ) -> Result<Option<GameFavoriteModel>, DbErr> {
        entity::prelude::GameFavorite::find_by_id((user_id, game_id))
            .one(self.db)
            .await
    }

    /// Add a game to the user's favorites. Adding it twice is a no-op.
    pub async fn create(&self, user_id: i32, game_id: i32) -> Result<(), DbErr> {
        let favorite = entity::game_favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            game_id: ActiveValue::Set(game_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        entity::prelude::GameFavorite::insert(favorite)
            .on_conflict(
                OnConflict::columns([
                    entity::game_favorite::Column::UserId,
                    entity::game_favorite::Column::GameId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, user_id: i32, game_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::GameFavorite::delete_by_id((user_id, game_id))
            .exec(self.db)
            .await
    }

    pub async fn delete_by_game(&self, game_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::GameFavorite::delete_many()
            .filter(entity::game_favorite::Column::GameId.eq(game_id))
            .exec(self.db)
            .await
    }

    pub async fn count(&self, game_id: i32) -> Result<u64, DbErr> {
        entity::prelude::GameFavorite::find()
            .filter(entity::game_favorite::Column::GameId.eq(game_id))
            .count(self.db)
            .await
    }
}
