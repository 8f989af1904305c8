//! Like/dislike reconciliation.
//!
//! A user holds at most one reaction per game. Reacting with the kind already held removes it,
//! reacting with the other kind replaces it. The change is resolved against the stored reaction
//! inside a transaction and the totals returned are recounted from the table.

use dioxus_logger::tracing;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::reaction::{ReactionChange, ReactionKind, ReactionSummaryDto},
    server::{
        data::{game::GameRepository, reaction::ReactionRepository},
        error::{game::GameError, Error},
    },
};

pub struct ReactionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReactionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Apply `desired` as the user's reaction to a game and return the new totals.
    ///
    /// # Returns
    /// - `Ok(ReactionSummaryDto)` - Totals after the change, with the user's resulting reaction
    /// - `Err(Error::GameError(GameError::NotFound))` - No game with this ID
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was changed
    pub async fn react(
        &self,
        user_id: i32,
        game_id: i32,
        desired: ReactionKind,
    ) -> Result<ReactionSummaryDto, Error> {
        let txn = self.db.begin().await?;

        if GameRepository::new(&txn).get(game_id).await?.is_none() {
            return Err(GameError::NotFound(game_id).into());
        }

        let reaction_repository = ReactionRepository::new(&txn);
        let prior = reaction_repository
            .get(user_id, game_id)
            .await?
            .map(|reaction| ReactionKind::from(reaction.kind));

        let change = ReactionChange::resolve(prior, desired);
        match change {
            ReactionChange::Remove(_) => {
                reaction_repository.delete(user_id, game_id).await?;
            }
            ReactionChange::Insert(kind) | ReactionChange::Replace { to: kind, .. } => {
                reaction_repository
                    .upsert(user_id, game_id, kind.into())
                    .await?;
            }
        }

        let summary = count(&txn, game_id, change.outcome()).await?;

        txn.commit().await?;

        tracing::debug!(user_id = %user_id, game_id = %game_id, ?change, "Reaction updated");

        Ok(summary)
    }

    /// Reaction totals for a game, with the viewer's own reaction when signed in.
    pub async fn summary(
        &self,
        game_id: i32,
        viewer_id: Option<i32>,
    ) -> Result<ReactionSummaryDto, Error> {
        let user_reaction = match viewer_id {
            Some(user_id) => ReactionRepository::new(self.db)
                .get(user_id, game_id)
                .await?
                .map(|reaction| ReactionKind::from(reaction.kind)),
            None => None,
        };

        count(self.db, game_id, user_reaction).await
    }
}

async fn count<C: ConnectionTrait>(
    db: &C,
    game_id: i32,
    user_reaction: Option<ReactionKind>,
) -> Result<ReactionSummaryDto, Error> {
    let reaction_repository = ReactionRepository::new(db);

    Ok(ReactionSummaryDto {
        likes: reaction_repository
            .count(game_id, ReactionKind::Like.into())
            .await?,
        dislikes: reaction_repository
            .count(game_id, ReactionKind::Dislike.into())
            .await?,
        user_reaction,
    })
}

#[cfg(test)]
mod tests {
    mod react {
        use enzonic_test_utils::prelude::*;

        use crate::{
            model::reaction::{ReactionKind, ReactionSummaryDto},
            server::{
                error::{game::GameError, Error},
                service::reaction::ReactionService,
            },
        };

        fn summary(
            likes: u64,
            dislikes: u64,
            user_reaction: Option<ReactionKind>,
        ) -> ReactionSummaryDto {
            ReactionSummaryDto {
                likes,
                dislikes,
                user_reaction,
            }
        }

        /// Expect like, dislike, dislike to walk through 1/0, 0/1, 0/0
        #[tokio::test]
        async fn like_dislike_dislike_sequence() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_game_tables()
                .with_user(TEST_EMAIL)
                .build()
                .await?;
            let game = test.game().insert_game(1, "Orbit").await?;
            let reaction_service = ReactionService::new(&test.db);

            let liked = reaction_service
                .react(1, game.id, ReactionKind::Like)
                .await
                .unwrap();
            assert_eq!(liked, summary(1, 0, Some(ReactionKind::Like)));

            let disliked = reaction_service
                .react(1, game.id, ReactionKind::Dislike)
                .await
                .unwrap();
            assert_eq!(disliked, summary(0, 1, Some(ReactionKind::Dislike)));

            let cleared = reaction_service
                .react(1, game.id, ReactionKind::Dislike)
                .await
                .unwrap();
            assert_eq!(cleared, summary(0, 0, None));

            Ok(())
        }

        /// Expect liking twice to return the like counter to its starting value
        #[tokio::test]
        async fn like_twice_toggles_off() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_game_tables()
                .with_user(TEST_EMAIL)
                .with_user(TEST_OTHER_EMAIL)
                .build()
                .await?;
            let game = test.game().insert_game(1, "Orbit").await?;
            test.reaction()
                .insert_reaction(2, game.id, entity::game_reaction::ReactionKind::Like)
                .await?;
            let reaction_service = ReactionService::new(&test.db);

            reaction_service
                .react(1, game.id, ReactionKind::Like)
                .await
                .unwrap();
            let result = reaction_service
                .react(1, game.id, ReactionKind::Like)
                .await
                .unwrap();

            assert_eq!(result, summary(1, 0, None));

            Ok(())
        }

        /// Expect NotFound for a game that does not exist
        #[tokio::test]
        async fn fails_for_missing_game() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_game_tables()
                .with_user(TEST_EMAIL)
                .build()
                .await?;

            let result = ReactionService::new(&test.db)
                .react(1, 12, ReactionKind::Like)
                .await;

            assert!(matches!(
                result,
                Err(Error::GameError(GameError::NotFound(12)))
            ));

            Ok(())
        }
    }
}
