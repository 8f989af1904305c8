use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func, LikeExpr},
    ActiveModelTrait, ActiveValue, Condition, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    ExprTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use entity::game::MediaKind;

use crate::server::model::db::GameModel;

/// Fields of a game supplied by the uploader.
pub struct NewGame<'a> {
    pub user_id: i32,
    pub title: &'a str,
    pub description: &'a str,
    pub media_kind: MediaKind,
    pub media_url: Option<&'a str>,
}

pub struct GameRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GameRepository<'a, C> {
    /// Creates a new instance of [`GameRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, game: NewGame<'_>) -> Result<GameModel, DbErr> {
        let now = Utc::now().naive_utc();

        let game = entity::game::ActiveModel {
            user_id: ActiveValue::Set(game.user_id),
            title: ActiveValue::Set(game.title.to_string()),
            description: ActiveValue::Set(game.description.to_string()),
            thumbnail_url: ActiveValue::Set(None),
            media_kind: ActiveValue::Set(game.media_kind),
            media_url: ActiveValue::Set(game.media_url.map(str::to_string)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        game.insert(self.db).await
    }

    pub async fn get(&self, game_id: i32) -> Result<Option<GameModel>, DbErr> {
        entity::prelude::Game::find_by_id(game_id).one(self.db).await
    }

    /// All games, newest first, optionally filtered by a case-insensitive search over the title
    /// and description.
    pub async fn list(&self, search: Option<&str>) -> Result<Vec<GameModel>, DbErr> {
        let mut query = entity::prelude::Game::find();

        if let Some(search) = search.map(str::trim).filter(|s| !s.is_empty()) {
            let pattern = format!("%{}%", escape_like(&search.to_lowercase()));

            query = query.filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::game::Column::Title)))
                            .like(LikeExpr::new(pattern.clone()).escape('\\')),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::game::Column::Description)))
                            .like(LikeExpr::new(pattern).escape('\\')),
                    ),
            );
        }

        query
            .order_by_desc(entity::game::Column::CreatedAt)
            .order_by_desc(entity::game::Column::Id)
            .all(self.db)
            .await
    }

    /// Update the title and description of a game, and its thumbnail when one is provided.
    pub async fn update(
        &self,
        game: GameModel,
        title: &str,
        description: &str,
        thumbnail_url: Option<String>,
    ) -> Result<GameModel, DbErr> {
        let mut game_am = game.into_active_model();
        game_am.title = ActiveValue::Set(title.to_string());
        game_am.description = ActiveValue::Set(description.to_string());
        if let Some(thumbnail_url) = thumbnail_url {
            game_am.thumbnail_url = ActiveValue::Set(Some(thumbnail_url));
        }
        game_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        game_am.update(self.db).await
    }

    pub async fn set_thumbnail(
        &self,
        game: GameModel,
        thumbnail_url: String,
    ) -> Result<GameModel, DbErr> {
        let mut game_am = game.into_active_model();
        game_am.thumbnail_url = ActiveValue::Set(Some(thumbnail_url));

        game_am.update(self.db).await
    }

    /// Deletes a game
    ///
    /// Returns OK regardless of the game existing, check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, game_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Game::delete_by_id(game_id)
            .exec(self.db)
            .await
    }
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
