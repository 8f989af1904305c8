use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::reaction::FavoriteDto,
    server::{
        data::{favorite::FavoriteRepository, game::GameRepository},
        error::{game::GameError, Error},
    },
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Flip the stored favorite for a user and game, returning the new state.
    pub async fn toggle(&self, user_id: i32, game_id: i32) -> Result<FavoriteDto, Error> {
        let txn = self.db.begin().await?;

        if GameRepository::new(&txn).get(game_id).await?.is_none() {
            return Err(GameError::NotFound(game_id).into());
        }

        let favorite_repository = FavoriteRepository::new(&txn);
        let favorited = if favorite_repository.get(user_id, game_id).await?.is_some() {
            favorite_repository.delete(user_id, game_id).await?;
            false
        } else {
            favorite_repository.create(user_id, game_id).await?;
            true
        };
        let favorites = favorite_repository.count(game_id).await?;

        txn.commit().await?;

        tracing::debug!(user_id = %user_id, game_id = %game_id, favorited, "Favorite toggled");

        Ok(FavoriteDto {
            favorited,
            favorites,
        })
    }

    /// Favorite count of a game and whether the viewer has favorited it.
    pub async fn state(&self, game_id: i32, viewer_id: Option<i32>) -> Result<FavoriteDto, Error> {
        let favorite_repository = FavoriteRepository::new(self.db);

        let favorited = match viewer_id {
            Some(user_id) => favorite_repository.get(user_id, game_id).await?.is_some(),
            None => false,
        };

        Ok(FavoriteDto {
            favorited,
            favorites: favorite_repository.count(game_id).await?,
        })
    }
}
