use axum::{
    extract::{Path, Query, State},
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
};
use enzonic::{
    model::game::{GameDetailDto, GameDto, MediaKind},
    server::{
        controller::game::{
            create_game, delete_game, get_game, list_games, update_game, SearchParams,
        },
        model::{app::AppState, session::user::SessionUserId},
    },
};
use enzonic_test_utils::prelude::*;

use crate::util::{json_body, multipart, Part};

async fn signed_in() -> Result<TestContext, TestError> {
    let test = TestBuilder::new()
        .with_game_tables()
        .with_user(TEST_EMAIL)
        .with_user(TEST_OTHER_EMAIL)
        .build()
        .await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    Ok(test)
}

mod list_games {
    use super::*;

    #[tokio::test]
    /// Expect every game newest first without a search term
    async fn returns_games_newest_first() -> Result<(), TestError> {
        let test = signed_in().await?;
        test.game().insert_game(1, "Orbit").await?;
        test.game().insert_game(2, "Tetrad").await?;
        let state: AppState = test.to_app_state();

        let result = list_games(State(state), Query(SearchParams { search: None })).await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let games: Vec<GameDto> = json_body(resp).await;
        let titles: Vec<&str> = games.iter().map(|game| game.title.as_str()).collect();
        assert_eq!(titles, ["Tetrad", "Orbit"]);

        Ok(())
    }

    #[tokio::test]
    /// Expect only games whose title or description match the search
    async fn filters_by_search_term() -> Result<(), TestError> {
        let test = signed_in().await?;
        test.game().insert_game(1, "Orbit").await?;
        test.game()
            .insert_game_with_description(1, "Tetrad", "Falling blocks in orbit")
            .await?;
        test.game().insert_game(2, "Maze").await?;
        let state: AppState = test.to_app_state();

        let result = list_games(
            State(state),
            Query(SearchParams {
                search: Some("ORBIT".to_string()),
            }),
        )
        .await;

        let games: Vec<GameDto> = json_body(result.unwrap().into_response()).await;
        assert_eq!(games.len(), 2);
        assert!(games.iter().all(|game| game.title != "Maze"));

        Ok(())
    }
}

mod get_game {
    use super::*;

    #[tokio::test]
    /// Expect the viewer's reaction and favorite state in the details
    async fn returns_details_for_viewer() -> Result<(), TestError> {
        let test = signed_in().await?;
        let game = test.game().insert_game(2, "Orbit").await?;
        test.reaction()
            .insert_reaction(1, game.id, entity::game_reaction::ReactionKind::Like)
            .await?;
        test.favorite().insert_favorite(1, game.id).await?;
        let state: AppState = test.to_app_state();

        let result = get_game(State(state), test.session.clone(), Path(game.id)).await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let detail: GameDetailDto = json_body(resp).await;
        assert_eq!(detail.game.title, "Orbit");
        assert_eq!(detail.reactions.likes, 1);
        assert!(detail.reactions.user_reaction.is_some());
        assert!(detail.favorite.favorited);
        assert_eq!(detail.favorite.favorites, 1);

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 for a game that does not exist
    async fn returns_not_found_for_missing_game() -> Result<(), TestError> {
        let test = signed_in().await?;
        let state: AppState = test.to_app_state();

        let result = get_game(State(state), test.session.clone(), Path(42)).await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod create_game {
    use super::*;

    #[tokio::test]
    /// Expect a redirect to the new game with its file stored in the media directory
    async fn stores_uploaded_game() -> Result<(), TestError> {
        let test = signed_in().await?;
        let state: AppState = test.to_app_state();
        let form = multipart(&[
            Part::Text("title", "Orbit"),
            Part::Text("description", "Keep the satellite up"),
            Part::Text("media_kind", "embed"),
            Part::Text("media_url", ""),
            Part::File {
                name: "file",
                file_name: "orbit.sb3",
                data: b"scratch project",
            },
            Part::File {
                name: "thumbnail",
                file_name: "",
                data: b"",
            },
        ])
        .await;

        let resp = create_game(State(state.clone()), test.session.clone(), form).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers()[LOCATION], "/games/1");

        let detail: GameDetailDto = json_body(
            get_game(State(state), test.session.clone(), Path(1))
                .await
                .unwrap()
                .into_response(),
        )
        .await;
        assert_eq!(detail.game.media_kind, MediaKind::Embed);
        assert_eq!(detail.game.owner_id, 1);
        assert!(detail.game.thumbnail_url.is_none());
        let media_url = detail.game.media_url.unwrap();
        let stored = media_url.strip_prefix("/media/").unwrap();
        assert!(test.media_path().join(stored).is_file());

        Ok(())
    }

    #[tokio::test]
    /// Expect a redirect back to the form with a 401 status when nobody is signed in
    async fn requires_sign_in() -> Result<(), TestError> {
        let test = TestBuilder::new().with_game_tables().build().await?;
        let state: AppState = test.to_app_state();
        let form = multipart(&[
            Part::Text("title", "Orbit"),
            Part::Text("media_kind", "link"),
            Part::Text("media_url", "https://example.com/orbit"),
        ])
        .await;

        let resp = create_game(State(state), test.session.clone(), form).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers()[LOCATION],
            "/games/upload?error=Sign%20in%20required&status=401"
        );

        Ok(())
    }

    #[tokio::test]
    /// Expect a redirect back to the form with the validation message without media
    async fn rejects_upload_without_media() -> Result<(), TestError> {
        let test = signed_in().await?;
        let state: AppState = test.to_app_state();
        let form = multipart(&[
            Part::Text("title", "Orbit"),
            Part::Text("description", "No media"),
            Part::Text("media_kind", "download"),
        ])
        .await;

        let resp = create_game(State(state), test.session.clone(), form).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers()[LOCATION],
            "/games/upload?error=Upload%20a%20game%20file%20or%20provide%20a%20URL&status=400"
        );

        Ok(())
    }

    #[tokio::test]
    /// Expect a redirect back to the form with a 400 status for an unknown media kind
    async fn rejects_unknown_media_kind() -> Result<(), TestError> {
        let test = signed_in().await?;
        let state: AppState = test.to_app_state();
        let form = multipart(&[
            Part::Text("title", "Orbit"),
            Part::Text("media_kind", "stream"),
            Part::Text("media_url", "https://example.com/orbit"),
        ])
        .await;

        let resp = create_game(State(state), test.session.clone(), form).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        let location = resp.headers()[LOCATION].to_str().unwrap();
        assert!(location.starts_with("/games/upload?error="));
        assert!(location.ends_with("&status=400"));

        Ok(())
    }
}

mod update_game {
    use super::*;

    #[tokio::test]
    /// Expect a redirect and the new title after the owner edits
    async fn owner_updates_game() -> Result<(), TestError> {
        let test = signed_in().await?;
        let game = test.game().insert_game(1, "Orbit").await?;
        let state: AppState = test.to_app_state();
        let form = multipart(&[
            Part::Text("title", "Orbit Deluxe"),
            Part::Text("description", "Now with moons"),
            Part::File {
                name: "thumbnail",
                file_name: "cover.png",
                data: b"png bytes",
            },
        ])
        .await;

        let resp = update_game(
            State(state.clone()),
            test.session.clone(),
            Path(game.id),
            form,
        )
        .await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers()[LOCATION], format!("/games/{}", game.id));
        let detail: GameDetailDto = json_body(
            get_game(State(state), test.session.clone(), Path(game.id))
                .await
                .unwrap()
                .into_response(),
        )
        .await;
        assert_eq!(detail.game.title, "Orbit Deluxe");
        assert_eq!(
            detail.game.thumbnail_url.as_deref(),
            Some(format!("/media/{}/thumbnail.png", game.id).as_str())
        );

        Ok(())
    }

    #[tokio::test]
    /// Expect a redirect back to the edit form with a 403 status for someone else's game
    async fn rejects_non_owner() -> Result<(), TestError> {
        let test = signed_in().await?;
        let game = test.game().insert_game(2, "Orbit").await?;
        let state: AppState = test.to_app_state();
        let form = multipart(&[
            Part::Text("title", "Mine now"),
            Part::Text("description", ""),
        ])
        .await;

        let resp = update_game(State(state), test.session.clone(), Path(game.id), form).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers()[LOCATION],
            format!(
                "/games/{}/edit?error=Only%20the%20owner%20can%20change%20this%20game&status=403",
                game.id
            )
        );

        Ok(())
    }
}

mod delete_game {
    use super::*;

    #[tokio::test]
    /// Expect 204 and the game along with its comments gone
    async fn owner_deletes_game() -> Result<(), TestError> {
        let test = signed_in().await?;
        let game = test.game().insert_game(1, "Orbit").await?;
        test.comment().insert_comment(2, game.id, "Nice").await?;
        let state: AppState = test.to_app_state();

        let result = delete_game(State(state.clone()), test.session.clone(), Path(game.id)).await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        let resp = get_game(State(state), test.session.clone(), Path(game.id))
            .await
            .err()
            .unwrap()
            .into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    #[tokio::test]
    /// Expect 403 and the game kept when someone else tries to delete it
    async fn rejects_non_owner() -> Result<(), TestError> {
        let test = signed_in().await?;
        let game = test.game().insert_game(2, "Orbit").await?;
        let state: AppState = test.to_app_state();

        let result = delete_game(State(state.clone()), test.session.clone(), Path(game.id)).await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert!(get_game(State(state), test.session.clone(), Path(game.id))
            .await
            .is_ok());

        Ok(())
    }
}
