use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251014_000001_create_user_table::EnzonicUser;

static IDX_GAME_USER_ID: &str = "idx-game-user_id";
static IDX_GAME_CREATED_AT: &str = "idx-game-created_at";
static FK_GAME_USER_ID: &str = "fk-game-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(pk_auto(Game::Id))
                    .col(integer(Game::UserId))
                    .col(string(Game::Title))
                    .col(text(Game::Description))
                    .col(string_null(Game::ThumbnailUrl))
                    .col(string(Game::MediaKind))
                    .col(string_null(Game::MediaUrl))
                    .col(timestamp(Game::CreatedAt))
                    .col(timestamp(Game::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_GAME_USER_ID)
                            .from(Game::Table, Game::UserId)
                            .to(EnzonicUser::Table, EnzonicUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GAME_USER_ID)
                    .table(Game::Table)
                    .col(Game::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GAME_CREATED_AT)
                    .table(Game::Table)
                    .col(Game::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GAME_CREATED_AT)
                    .table(Game::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GAME_USER_ID)
                    .table(Game::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Game::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Game {
    Table,
    Id,
    UserId,
    Title,
    Description,
    ThumbnailUrl,
    MediaKind,
    MediaUrl,
    CreatedAt,
    UpdatedAt,
}
