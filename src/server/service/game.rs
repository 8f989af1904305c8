//! Game catalog, uploads, and owner-only edits.

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        game::{validate_game_text, GameDetailDto, GameDto},
        validation::{allowed_extension, ValidationError, GAME_FILE_EXTENSIONS, THUMBNAIL_EXTENSIONS},
    },
    server::{
        data::{
            comment::CommentRepository,
            favorite::FavoriteRepository,
            game::{GameRepository, NewGame},
            reaction::ReactionRepository,
        },
        error::{game::GameError, Error},
        media::{game_file_path, thumbnail_path, MediaStore},
        model::{
            db::GameModel,
            upload::{GameEdit, GameUpload, UploadedFile},
        },
        service::{favorite::FavoriteService, reaction::ReactionService},
    },
};

pub struct GameService<'a> {
    db: &'a DatabaseConnection,
    media: &'a MediaStore,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection, media: &'a MediaStore) -> Self {
        Self { db, media }
    }

    /// All games newest first, filtered by `search` when provided.
    pub async fn list(&self, search: Option<&str>) -> Result<Vec<GameDto>, Error> {
        let games = GameRepository::new(self.db).list(search).await?;

        Ok(games.into_iter().map(GameDto::from).collect())
    }

    /// A game with its reaction totals and favorite state as seen by `viewer_id`.
    ///
    /// # Returns
    /// - `Ok(GameDetailDto)` - Game found
    /// - `Err(Error::GameError(GameError::NotFound))` - No game with this ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_detail(
        &self,
        game_id: i32,
        viewer_id: Option<i32>,
    ) -> Result<GameDetailDto, Error> {
        let game = self.find(game_id).await?;

        let reactions = ReactionService::new(self.db)
            .summary(game_id, viewer_id)
            .await?;
        let favorite = FavoriteService::new(self.db)
            .state(game_id, viewer_id)
            .await?;

        Ok(GameDetailDto {
            game: game.into(),
            reactions,
            favorite,
        })
    }

    /// Store an uploaded game owned by `user_id`.
    ///
    /// The game file, when present, is stored under `games/` and becomes the media URL. Otherwise
    /// the form must carry an http(s) URL. The thumbnail is stored after the row exists so it can
    /// live under the game's ID.
    pub async fn create(&self, user_id: i32, upload: GameUpload) -> Result<GameDto, Error> {
        let (title, description) = validate_game_text(&upload.title, &upload.description)?;

        let thumbnail = upload
            .thumbnail
            .map(|file| validate_file(file, &THUMBNAIL_EXTENSIONS))
            .transpose()?;

        let media_url = match (upload.file, upload.media_url) {
            (Some(file), _) => {
                let (ext, file) = validate_file(file, &GAME_FILE_EXTENSIONS)?;
                self.media.upload(&game_file_path(&ext), file.data).await?
            }
            (None, Some(url)) => validate_media_url(&url)?,
            (None, None) => return Err(ValidationError::MissingMedia.into()),
        };

        let game_repository = GameRepository::new(self.db);
        let created = game_repository
            .create(NewGame {
                user_id,
                title: &title,
                description: &description,
                media_kind: upload.media_kind.into(),
                media_url: Some(&media_url),
            })
            .await;

        let mut game = match created {
            Ok(game) => game,
            Err(e) => {
                // No row points at the stored game file
                self.remove_media(&media_url).await;
                return Err(e.into());
            }
        };

        if let Some((ext, file)) = thumbnail {
            let url = self
                .media
                .upload(&thumbnail_path(game.id, &ext), file.data)
                .await?;
            game = game_repository.set_thumbnail(game, url).await?;
        }

        tracing::info!(user_id = %user_id, game_id = %game.id, "Game uploaded");

        Ok(game.into())
    }

    /// Update a game's text and optionally replace its thumbnail. Owner only.
    pub async fn update(
        &self,
        user_id: i32,
        game_id: i32,
        edit: GameEdit,
    ) -> Result<GameDto, Error> {
        let game = self.find_owned(user_id, game_id).await?;
        let (title, description) = validate_game_text(&edit.title, &edit.description)?;

        let thumbnail_url = match edit.thumbnail {
            Some(file) => {
                let (ext, file) = validate_file(file, &THUMBNAIL_EXTENSIONS)?;
                Some(
                    self.media
                        .upload(&thumbnail_path(game_id, &ext), file.data)
                        .await?,
                )
            }
            None => None,
        };

        let previous_thumbnail = game.thumbnail_url.clone();
        let game = GameRepository::new(self.db)
            .update(game, &title, &description, thumbnail_url)
            .await?;

        // A thumbnail with a different extension lives at a different path
        if let Some(previous) = previous_thumbnail {
            if game.thumbnail_url.as_deref() != Some(previous.as_str()) {
                self.remove_media(&previous).await;
            }
        }

        Ok(game.into())
    }

    /// Delete a game with its comments, reactions and favorites. Owner only.
    ///
    /// Rows are removed in one transaction. Stored files are removed afterwards and a failure to
    /// remove them does not fail the request.
    pub async fn delete(&self, user_id: i32, game_id: i32) -> Result<(), Error> {
        let game = self.find_owned(user_id, game_id).await?;

        let txn = self.db.begin().await?;

        CommentRepository::new(&txn).delete_by_game(game_id).await?;
        ReactionRepository::new(&txn).delete_by_game(game_id).await?;
        FavoriteRepository::new(&txn).delete_by_game(game_id).await?;
        GameRepository::new(&txn).delete(game_id).await?;

        txn.commit().await?;

        for url in [game.thumbnail_url.as_deref(), game.media_url.as_deref()]
            .into_iter()
            .flatten()
        {
            self.remove_media(url).await;
        }

        tracing::info!(user_id = %user_id, game_id = %game_id, "Game deleted");

        Ok(())
    }

    /// Remove a stored file that is no longer referenced. Failures are logged only.
    async fn remove_media(&self, url: &str) {
        if let Err(e) = self.media.delete_url(url).await {
            tracing::warn!(url = %url, "Failed to remove unused media: {}", e);
        }
    }

    async fn find(&self, game_id: i32) -> Result<GameModel, Error> {
        GameRepository::new(self.db)
            .get(game_id)
            .await?
            .ok_or_else(|| GameError::NotFound(game_id).into())
    }

    async fn find_owned(&self, user_id: i32, game_id: i32) -> Result<GameModel, Error> {
        let game = self.find(game_id).await?;

        if game.user_id != user_id {
            return Err(GameError::NotOwner { user_id, game_id }.into());
        }

        Ok(game)
    }
}

fn validate_file(
    file: UploadedFile,
    allowed: &[&str],
) -> Result<(String, UploadedFile), ValidationError> {
    let ext = allowed_extension(&file.file_name, allowed)?;

    Ok((ext, file))
}

fn validate_media_url(url: &str) -> Result<String, ValidationError> {
    let url = url.trim();

    if url.is_empty() {
        return Err(ValidationError::MissingMedia);
    }

    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(ValidationError::InvalidMediaUrl);
    }

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use crate::{
        model::game::MediaKind,
        server::model::upload::{GameEdit, GameUpload, UploadedFile},
    };

    fn upload(title: &str) -> GameUpload {
        GameUpload {
            title: title.to_string(),
            description: "A game".to_string(),
            media_kind: MediaKind::Embed,
            media_url: None,
            file: Some(UploadedFile {
                file_name: "project.sb3".to_string(),
                data: b"sb3".to_vec(),
            }),
            thumbnail: Some(UploadedFile {
                file_name: "cover.png".to_string(),
                data: b"png".to_vec(),
            }),
        }
    }

    fn edit(title: &str, thumbnail: Option<UploadedFile>) -> GameEdit {
        GameEdit {
            title: title.to_string(),
            description: "Edited".to_string(),
            thumbnail,
        }
    }

    mod create {
        use enzonic_test_utils::prelude::*;

        use super::upload;
        use crate::{
            model::{game::MediaKind, validation::ValidationError},
            server::{error::Error, model::app::AppState, service::game::GameService},
        };

        /// Expect the game file and thumbnail to be stored and linked
        #[tokio::test]
        async fn stores_file_and_thumbnail() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_game_tables()
                .with_user(TEST_EMAIL)
                .build()
                .await?;
            let state: AppState = test.to_app_state();

            let game = GameService::new(&state.db, &state.media)
                .create(1, upload("Orbit"))
                .await
                .unwrap();

            let media_url = game.media_url.unwrap();
            assert!(media_url.starts_with("/media/games/"));
            assert!(media_url.ends_with(".sb3"));
            assert_eq!(
                game.thumbnail_url.as_deref(),
                Some(format!("/media/{}/thumbnail.png", game.id).as_str())
            );
            assert!(test
                .media_path()
                .join(format!("{}/thumbnail.png", game.id))
                .exists());

            Ok(())
        }

        /// Expect an external URL to be used when no file is uploaded
        #[tokio::test]
        async fn accepts_external_url() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_game_tables()
                .with_user(TEST_EMAIL)
                .build()
                .await?;
            let state: AppState = test.to_app_state();
            let mut form = upload("Linked");
            form.media_kind = MediaKind::Link;
            form.media_url = Some(" https://itch.io/orbit ".to_string());
            form.file = None;
            form.thumbnail = None;

            let game = GameService::new(&state.db, &state.media)
                .create(1, form)
                .await
                .unwrap();

            assert_eq!(game.media_url.as_deref(), Some("https://itch.io/orbit"));
            assert_eq!(game.media_kind, MediaKind::Link);

            Ok(())
        }

        /// Expect MissingMedia without a file or URL
        #[tokio::test]
        async fn rejects_missing_media() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_game_tables()
                .with_user(TEST_EMAIL)
                .build()
                .await?;
            let state: AppState = test.to_app_state();
            let mut form = upload("Orbit");
            form.file = None;

            let result = GameService::new(&state.db, &state.media)
                .create(1, form)
                .await;

            assert!(matches!(
                result,
                Err(Error::ValidationError(ValidationError::MissingMedia))
            ));

            Ok(())
        }

        /// Expect the stored game file to be removed when the row cannot be written
        #[tokio::test]
        async fn removes_game_file_when_insert_fails() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_game_tables()
                .with_user(TEST_EMAIL)
                .build()
                .await?;
            let state: AppState = test.to_app_state();
            let mut form = upload("Orbit");
            form.thumbnail = None;

            // No user 999, so the owner foreign key rejects the row
            let result = GameService::new(&state.db, &state.media)
                .create(999, form)
                .await;

            assert!(matches!(result, Err(Error::DbErr(_))));
            let stored = std::fs::read_dir(test.media_path().join("games"))?.count();
            assert_eq!(stored, 0);

            Ok(())
        }

        /// Expect unsupported game files to be rejected before anything is stored
        #[tokio::test]
        async fn rejects_unsupported_file_type() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_game_tables()
                .with_user(TEST_EMAIL)
                .build()
                .await?;
            let state: AppState = test.to_app_state();
            let mut form = upload("Orbit");
            if let Some(file) = form.file.as_mut() {
                file.file_name = "setup.exe".to_string();
            }

            let result = GameService::new(&state.db, &state.media)
                .create(1, form)
                .await;

            assert!(matches!(
                result,
                Err(Error::ValidationError(ValidationError::UnsupportedFileType(_)))
            ));
            assert!(!test.media_path().join("games").exists());

            Ok(())
        }
    }

    mod update {
        use enzonic_test_utils::prelude::*;

        use super::edit;
        use crate::server::{
            error::{game::GameError, Error},
            model::{app::AppState, upload::UploadedFile},
            service::game::GameService,
        };

        /// Expect the owner to change the title and replace the thumbnail in place
        #[tokio::test]
        async fn owner_updates_game() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_game_tables()
                .with_user(TEST_EMAIL)
                .build()
                .await?;
            let state: AppState = test.to_app_state();
            let game = test.game().insert_game(1, "Orbit").await?;
            let game_service = GameService::new(&state.db, &state.media);

            for data in [b"first".to_vec(), b"second".to_vec()] {
                let thumbnail = UploadedFile {
                    file_name: "cover.png".to_string(),
                    data,
                };
                game_service
                    .update(1, game.id, edit("Orbit 2", Some(thumbnail)))
                    .await
                    .unwrap();
            }

            let updated = game_service.update(1, game.id, edit("Orbit 3", None)).await.unwrap();

            assert_eq!(updated.title, "Orbit 3");
            assert_eq!(
                updated.thumbnail_url,
                Some(format!("/media/{}/thumbnail.png", game.id))
            );
            let stored =
                std::fs::read(test.media_path().join(format!("{}/thumbnail.png", game.id)))?;
            assert_eq!(stored, b"second");

            Ok(())
        }

        /// Expect the old thumbnail file to go when one with another extension replaces it
        #[tokio::test]
        async fn removes_replaced_thumbnail() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_game_tables()
                .with_user(TEST_EMAIL)
                .build()
                .await?;
            let state: AppState = test.to_app_state();
            let game = test.game().insert_game(1, "Orbit").await?;
            let game_service = GameService::new(&state.db, &state.media);

            for file_name in ["cover.png", "cover.jpg"] {
                let thumbnail = UploadedFile {
                    file_name: file_name.to_string(),
                    data: b"img".to_vec(),
                };
                game_service
                    .update(1, game.id, edit("Orbit", Some(thumbnail)))
                    .await
                    .unwrap();
            }

            let png = test.media_path().join(format!("{}/thumbnail.png", game.id));
            let jpg = test.media_path().join(format!("{}/thumbnail.jpg", game.id));
            assert!(!png.exists());
            assert!(jpg.is_file());

            game_service.delete(1, game.id).await.unwrap();
            assert!(!jpg.exists());

            Ok(())
        }

        /// Expect NotOwner when another user edits the game
        #[tokio::test]
        async fn rejects_non_owner() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_game_tables()
                .with_user(TEST_EMAIL)
                .with_user(TEST_OTHER_EMAIL)
                .build()
                .await?;
            let state: AppState = test.to_app_state();
            let game = test.game().insert_game(1, "Orbit").await?;

            let result = GameService::new(&state.db, &state.media)
                .update(2, game.id, edit("Mine now", None))
                .await;

            assert!(matches!(
                result,
                Err(Error::GameError(GameError::NotOwner { .. }))
            ));

            Ok(())
        }
    }

    mod delete {
        use enzonic_test_utils::prelude::*;
        use entity::game_reaction::ReactionKind;
        use sea_orm::{EntityTrait, PaginatorTrait};

        use super::upload;
        use crate::server::{
            error::{game::GameError, Error},
            model::app::AppState,
            service::game::GameService,
        };

        /// Expect comments, reactions, favorites and stored files to go with the game
        #[tokio::test]
        async fn removes_game_and_dependents() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_game_tables()
                .with_user(TEST_EMAIL)
                .with_user(TEST_OTHER_EMAIL)
                .build()
                .await?;
            let state: AppState = test.to_app_state();
            let game_service = GameService::new(&state.db, &state.media);
            let game = game_service.create(1, upload("Orbit")).await.unwrap();
            let kept = test.game().insert_game(2, "Kept").await?;
            test.comment().insert_comment(2, game.id, "gg").await?;
            test.comment().insert_comment(2, kept.id, "still here").await?;
            test.reaction()
                .insert_reaction(2, game.id, ReactionKind::Like)
                .await?;
            test.favorite().insert_favorite(2, game.id).await?;

            game_service.delete(1, game.id).await.unwrap();

            assert!(entity::prelude::Game::find_by_id(game.id)
                .one(&test.db)
                .await?
                .is_none());
            assert_eq!(entity::prelude::Comment::find().count(&test.db).await?, 1);
            assert_eq!(entity::prelude::GameReaction::find().count(&test.db).await?, 0);
            assert_eq!(entity::prelude::GameFavorite::find().count(&test.db).await?, 0);
            assert!(!test
                .media_path()
                .join(format!("{}/thumbnail.png", game.id))
                .exists());

            Ok(())
        }

        /// Expect NotOwner and nothing removed when another user deletes the game
        #[tokio::test]
        async fn rejects_non_owner() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_game_tables()
                .with_user(TEST_EMAIL)
                .with_user(TEST_OTHER_EMAIL)
                .build()
                .await?;
            let state: AppState = test.to_app_state();
            let game = test.game().insert_game(1, "Orbit").await?;
            test.comment().insert_comment(1, game.id, "mine").await?;

            let result = GameService::new(&state.db, &state.media)
                .delete(2, game.id)
                .await;

            assert!(matches!(
                result,
                Err(Error::GameError(GameError::NotOwner { .. }))
            ));
            assert_eq!(entity::prelude::Comment::find().count(&test.db).await?, 1);

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
            let state: AppState = test.to_app_state();

            let result = GameService::new(&state.db, &state.media)
                .delete(1, 404)
                .await;

            assert!(matches!(
                result,
                Err(Error::GameError(GameError::NotFound(404)))
            ));

            Ok(())
        }
    }

    mod get_detail {
        use enzonic_test_utils::prelude::*;
        use entity::game_reaction::ReactionKind as StoredKind;

        use crate::{
            model::reaction::ReactionKind,
            server::{model::app::AppState, service::game::GameService},
        };

        /// Expect totals for everyone and reaction/favorite state for the viewer
        #[tokio::test]
        async fn includes_viewer_state() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_game_tables()
                .with_user(TEST_EMAIL)
                .with_user(TEST_OTHER_EMAIL)
                .build()
                .await?;
            let state: AppState = test.to_app_state();
            let game = test.game().insert_game(1, "Orbit").await?;
            test.reaction()
                .insert_reaction(1, game.id, StoredKind::Like)
                .await?;
            test.reaction()
                .insert_reaction(2, game.id, StoredKind::Dislike)
                .await?;
            test.favorite().insert_favorite(1, game.id).await?;

            let game_service = GameService::new(&state.db, &state.media);
            let as_owner = game_service.get_detail(game.id, Some(1)).await.unwrap();
            let anonymous = game_service.get_detail(game.id, None).await.unwrap();

            assert_eq!(as_owner.reactions.likes, 1);
            assert_eq!(as_owner.reactions.dislikes, 1);
            assert_eq!(as_owner.reactions.user_reaction, Some(ReactionKind::Like));
            assert!(as_owner.favorite.favorited);
            assert_eq!(as_owner.favorite.favorites, 1);
            assert_eq!(anonymous.reactions.user_reaction, None);
            assert!(!anonymous.favorite.favorited);

            Ok(())
        }
    }
}
