use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251014_000001_create_user_table::EnzonicUser, m20251014_000002_create_game_table::Game,
};

static IDX_GAME_FAVORITE_GAME_ID: &str = "idx-game_favorite-game_id";
static FK_GAME_FAVORITE_USER_ID: &str = "fk-game_favorite-user_id";
static FK_GAME_FAVORITE_GAME_ID: &str = "fk-game_favorite-game_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameFavorite::Table)
                    .if_not_exists()
                    .col(integer(GameFavorite::UserId))
                    .col(integer(GameFavorite::GameId))
                    .col(timestamp(GameFavorite::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(GameFavorite::UserId)
                            .col(GameFavorite::GameId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_GAME_FAVORITE_USER_ID)
                            .from(GameFavorite::Table, GameFavorite::UserId)
                            .to(EnzonicUser::Table, EnzonicUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_GAME_FAVORITE_GAME_ID)
                            .from(GameFavorite::Table, GameFavorite::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GAME_FAVORITE_GAME_ID)
                    .table(GameFavorite::Table)
                    .col(GameFavorite::GameId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GAME_FAVORITE_GAME_ID)
                    .table(GameFavorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GameFavorite::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum GameFavorite {
    Table,
    UserId,
    GameId,
    CreatedAt,
}
