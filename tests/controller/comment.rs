use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{Duration, Utc};
use enzonic::{
    model::comment::{CommentDto, NewCommentDto, ANONYMOUS_AUTHOR},
    server::{
        controller::comment::{create_comment, delete_comment, get_comments},
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

fn new_comment(content: &str) -> Json<NewCommentDto> {
    Json(NewCommentDto {
        content: content.to_string(),
    })
}

mod get_comments {
    use super::*;

    #[tokio::test]
    /// Expect comments newest first with the author's name
    async fn returns_comments_newest_first() -> Result<(), TestError> {
        let test = signed_in_with_game().await?;
        let now = Utc::now().naive_utc();
        test.comment()
            .insert_comment_at(1, 1, "First", now - Duration::minutes(5))
            .await?;
        test.comment().insert_comment_at(2, 1, "Second", now).await?;
        let state: AppState = test.to_app_state();

        let result = get_comments(State(state), Path(1)).await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let comments: Vec<CommentDto> = json_body(resp).await;
        let contents: Vec<&str> = comments.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(contents, ["Second", "First"]);
        assert_eq!(comments[1].author_name, ANONYMOUS_AUTHOR);

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 for comments on a game that does not exist
    async fn returns_not_found_for_missing_game() -> Result<(), TestError> {
        let test = signed_in_with_game().await?;
        let state: AppState = test.to_app_state();

        let result = get_comments(State(state), Path(99)).await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod create_comment {
    use super::*;

    #[tokio::test]
    /// Expect 201 with the trimmed comment
    async fn creates_comment() -> Result<(), TestError> {
        let test = signed_in_with_game().await?;
        let state: AppState = test.to_app_state();

        let result = create_comment(
            State(state),
            test.session.clone(),
            Path(1),
            new_comment("  Great game!  "),
        )
        .await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let comment: CommentDto = json_body(resp).await;
        assert_eq!(comment.content, "Great game!");
        assert_eq!(comment.user_id, 1);
        assert_eq!(comment.author_name, ANONYMOUS_AUTHOR);

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 for a comment that is only whitespace
    async fn rejects_blank_comment() -> Result<(), TestError> {
        let test = signed_in_with_game().await?;
        let state: AppState = test.to_app_state();

        let result = create_comment(
            State(state),
            test.session.clone(),
            Path(1),
            new_comment("   "),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    #[tokio::test]
    /// Expect 401 when nobody is signed in
    async fn requires_sign_in() -> Result<(), TestError> {
        let test = signed_in_with_game().await?;
        test.session.clear().await;
        let state: AppState = test.to_app_state();

        let result = create_comment(
            State(state),
            test.session.clone(),
            Path(1),
            new_comment("Hello"),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }
}

mod delete_comment {
    use super::*;

    #[tokio::test]
    /// Expect 204 when the author deletes their comment
    async fn author_deletes_comment() -> Result<(), TestError> {
        let test = signed_in_with_game().await?;
        let comment = test.comment().insert_comment(1, 1, "Oops").await?;
        let state: AppState = test.to_app_state();

        let result = delete_comment(State(state.clone()), test.session.clone(), Path(comment.id)).await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        let comments: Vec<CommentDto> =
            json_body(get_comments(State(state), Path(1)).await.unwrap().into_response()).await;
        assert!(comments.is_empty());

        Ok(())
    }

    #[tokio::test]
    /// Expect 403 when deleting another player's comment
    async fn rejects_non_author() -> Result<(), TestError> {
        let test = signed_in_with_game().await?;
        let comment = test.comment().insert_comment(2, 1, "Mine").await?;
        let state: AppState = test.to_app_state();

        let result = delete_comment(State(state), test.session.clone(), Path(comment.id)).await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 for a comment that does not exist
    async fn returns_not_found_for_missing_comment() -> Result<(), TestError> {
        let test = signed_in_with_game().await?;
        let state: AppState = test.to_app_state();

        let result = delete_comment(State(state), test.session.clone(), Path(5)).await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}
