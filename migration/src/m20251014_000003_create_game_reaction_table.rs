use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251014_000001_create_user_table::EnzonicUser, m20251014_000002_create_game_table::Game,
};

static IDX_GAME_REACTION_GAME_ID: &str = "idx-game_reaction-game_id";
static FK_GAME_REACTION_USER_ID: &str = "fk-game_reaction-user_id";
static FK_GAME_REACTION_GAME_ID: &str = "fk-game_reaction-game_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameReaction::Table)
                    .if_not_exists()
                    .col(integer(GameReaction::UserId))
                    .col(integer(GameReaction::GameId))
                    .col(string(GameReaction::Kind))
                    .col(timestamp(GameReaction::CreatedAt))
                    .col(timestamp(GameReaction::UpdatedAt))
                    .primary_key(
                        Index::create()
                            .col(GameReaction::UserId)
                            .col(GameReaction::GameId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_GAME_REACTION_USER_ID)
                            .from(GameReaction::Table, GameReaction::UserId)
                            .to(EnzonicUser::Table, EnzonicUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_GAME_REACTION_GAME_ID)
                            .from(GameReaction::Table, GameReaction::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GAME_REACTION_GAME_ID)
                    .table(GameReaction::Table)
                    .col(GameReaction::GameId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GAME_REACTION_GAME_ID)
                    .table(GameReaction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GameReaction::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum GameReaction {
    Table,
    UserId,
    GameId,
    Kind,
    CreatedAt,
    UpdatedAt,
}
