use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::db::{CommentModel, UserModel};

pub struct CommentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommentRepository<'a, C> {
    /// Creates a new instance of [`CommentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        game_id: i32,
        content: &str,
    ) -> Result<CommentModel, DbErr> {
        let comment = entity::comment::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            game_id: ActiveValue::Set(game_id),
            content: ActiveValue::Set(content.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        comment.insert(self.db).await
    }

    pub async fn get(&self, comment_id: i32) -> Result<Option<CommentModel>, DbErr> {
        entity::prelude::Comment::find_by_id(comment_id)
            .one(self.db)
            .await
    }

    /// Comments on a game with their authors, newest first.
    pub async fn list_by_game(
        &self,
        game_id: i32,
    ) -> Result<Vec<(CommentModel, Option<UserModel>)>, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::GameId.eq(game_id))
            .find_also_related(entity::user::Entity)
            .order_by_desc(entity::comment::Column::CreatedAt)
            .order_by_desc(entity::comment::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, comment_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Comment::delete_by_id(comment_id)
            .exec(self.db)
            .await
    }

    pub async fn delete_by_game(&self, game_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Comment::delete_many()
            .filter(entity::comment::Column::GameId.eq(game_id))
            .exec(self.db)
            .await
    }
}
