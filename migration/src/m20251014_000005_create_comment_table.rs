use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251014_000001_create_user_table::EnzonicUser, m20251014_000002_create_game_table::Game,
};

static IDX_COMMENT_GAME_ID_CREATED_AT: &str = "idx-comment-game_id-created_at";
static FK_COMMENT_USER_ID: &str = "fk-comment-user_id";
static FK_COMMENT_GAME_ID: &str = "fk-comment-game_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comment::Table)
                    .if_not_exists()
                    .col(pk_auto(Comment::Id))
                    .col(integer(Comment::UserId))
                    .col(integer(Comment::GameId))
                    .col(text(Comment::Content))
                    .col(timestamp(Comment::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COMMENT_USER_ID)
                            .from(Comment::Table, Comment::UserId)
                            .to(EnzonicUser::Table, EnzonicUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COMMENT_GAME_ID)
                            .from(Comment::Table, Comment::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COMMENT_GAME_ID_CREATED_AT)
                    .table(Comment::Table)
                    .col(Comment::GameId)
                    .col(Comment::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COMMENT_GAME_ID_CREATED_AT)
                    .table(Comment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Comment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Comment {
    Table,
    Id,
    UserId,
    GameId,
    Content,
    CreatedAt,
}
