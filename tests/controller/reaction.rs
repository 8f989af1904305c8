use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use enzonic::{
    model::reaction::{FavoriteDto, ReactionDto, ReactionKind, ReactionSummaryDto},
    server::{
        controller::reaction::{react, toggle_favorite},
        model::{app::AppState, session::user::SessionUserId},
    },
};
use enzonic_test_utils::prelude::*;

use crate::util::json_body;

async fn signed_in_with_game() -> Result<TestContext, TestError> {
    let test = TestBuilder::new()
        .with_game_tables()
        .with_user(TEST_EMAIL)
        .with_user(TEST_OTHER_EMAIL)
        .build()
        .await?;
    test.game().insert_game(2, "Orbit").await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    Ok(test)
}

async fn send(test: &TestContext, kind: ReactionKind) -> ReactionSummaryDto {
    let state: AppState = test.to_app_state();
    let resp = react(
        State(state),
        test.session.clone(),
        Path(1),
        Json(ReactionDto { kind }),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    json_body(resp).await
}

mod react {
    use super::*;

    #[tokio::test]
    /// Expect a like to switch to a dislike and then be removed
    async fn switches_and_removes_reaction() -> Result<(), TestError> {
        let test = signed_in_with_game().await?;

        let liked = send(&test, ReactionKind::Like).await;
        assert_eq!((liked.likes, liked.dislikes), (1, 0));
        assert_eq!(liked.user_reaction, Some(ReactionKind::Like));

        let disliked = send(&test, ReactionKind::Dislike).await;
        assert_eq!((disliked.likes, disliked.dislikes), (0, 1));
        assert_eq!(disliked.user_reaction, Some(ReactionKind::Dislike));

        let cleared = send(&test, ReactionKind::Dislike).await;
        assert_eq!((cleared.likes, cleared.dislikes), (0, 0));
        assert_eq!(cleared.user_reaction, None);

        Ok(())
    }

    #[tokio::test]
    /// Expect totals to include other players' reactions
    async fn counts_other_players() -> Result<(), TestError> {
        let test = signed_in_with_game().await?;
        test.reaction()
            .insert_reaction(2, 1, entity::game_reaction::ReactionKind::Like)
            .await?;

        let summary = send(&test, ReactionKind::Like).await;

        assert_eq!(summary.likes, 2);

        Ok(())
    }

    #[tokio::test]
    /// Expect 401 when nobody is signed in
    async fn requires_sign_in() -> Result<(), TestError> {
        let test = signed_in_with_game().await?;
        test.session.clear().await;
        let state: AppState = test.to_app_state();

        let result = react(
            State(state),
            test.session.clone(),
            Path(1),
            Json(ReactionDto {
                kind: ReactionKind::Like,
            }),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 when reacting to a game that does not exist
    async fn returns_not_found_for_missing_game() -> Result<(), TestError> {
        let test = signed_in_with_game().await?;
        let state: AppState = test.to_app_state();

        let result = react(
            State(state),
            test.session.clone(),
            Path(99),
            Json(ReactionDto {
                kind: ReactionKind::Like,
            }),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod toggle_favorite {
    use super::*;

    #[tokio::test]
    /// Expect the first toggle to favorite and the second to remove it
    async fn toggles_favorite() -> Result<(), TestError> {
        let test = signed_in_with_game().await?;
        test.favorite().insert_favorite(2, 1).await?;
        let state: AppState = test.to_app_state();

        let resp = toggle_favorite(State(state.clone()), test.session.clone(), Path(1))
            .await
            .unwrap()
            .into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let favorite: FavoriteDto = json_body(resp).await;
        assert!(favorite.favorited);
        assert_eq!(favorite.favorites, 2);

        let resp = toggle_favorite(State(state), test.session.clone(), Path(1))
            .await
            .unwrap()
            .into_response();
        let favorite: FavoriteDto = json_body(resp).await;
        assert!(!favorite.favorited);
        assert_eq!(favorite.favorites, 1);

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 when favoriting a game that does not exist
    async fn returns_not_found_for_missing_game() -> Result<(), TestError> {
        let test = signed_in_with_game().await?;
        let state: AppState = test.to_app_state();

        let result = toggle_favorite(State(state), test.session.clone(), Path(99)).await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}
