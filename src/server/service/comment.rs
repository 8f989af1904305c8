//! Comment lifecycle: list, post, and author-only delete.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::comment::{author_name, validate_comment, CommentDto},
    server::{
        data::{comment::CommentRepository, game::GameRepository, user::UserRepository},
        error::{comment::CommentError, game::GameError, Error},
        model::db::{CommentModel, UserModel},
    },
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Comments on a game, newest first.
    pub async fn list(&self, game_id: i32) -> Result<Vec<CommentDto>, Error> {
        self.require_game(game_id).await?;

        let comments = CommentRepository::new(self.db).list_by_game(game_id).await?;

        Ok(comments
            .into_iter()
            .map(|(comment, author)| to_dto(comment, author.as_ref()))
            .collect())
    }

    /// Post a comment as `user_id`.
    ///
    /// # Returns
    /// - `Ok(CommentDto)` - Comment stored with trimmed content
    /// - `Err(Error::ValidationError)` - Content empty after trimming, or too long
    /// - `Err(Error::GameError(GameError::NotFound))` - No game with this ID
    pub async fn create(
        &self,
        user_id: i32,
        game_id: i32,
        content: &str,
    ) -> Result<CommentDto, Error> {
        let content = validate_comment(content)?;
        self.require_game(game_id).await?;

        let comment = CommentRepository::new(self.db)
            .create(user_id, game_id, &content)
            .await?;
        let author = UserRepository::new(self.db).get(user_id).await?;

        Ok(to_dto(comment, author.as_ref()))
    }

    /// Delete a comment. Only its author may do so.
    pub async fn delete(&self, user_id: i32, comment_id: i32) -> Result<(), Error> {
        let comment_repository = CommentRepository::new(self.db);

        let Some(comment) = comment_repository.get(comment_id).await? else {
            return Err(CommentError::NotFound(comment_id).into());
        };

        if comment.user_id != user_id {
            return Err(CommentError::NotOwner {
                user_id,
                comment_id,
            }
            .into());
        }

        comment_repository.delete(comment_id).await?;

        tracing::debug!(user_id = %user_id, comment_id = %comment_id, "Comment deleted");

        Ok(())
    }

    async fn require_game(&self, game_id: i32) -> Result<(), Error> {
        match GameRepository::new(self.db).get(game_id).await? {
            Some(_) => Ok(()),
            None => Err(GameError::NotFound(game_id).into()),
        }
    }
}

fn to_dto(comment: CommentModel, author: Option<&UserModel>) -> CommentDto {
    CommentDto {
        id: comment.id,
        game_id: comment.game_id,
        user_id: comment.user_id,
        author_name: author_name(author.and_then(|user| user.display_name.as_deref())),
        content: comment.content,
        created_at: comment.created_at,
    }
}
