use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use enzonic::{
    model::user::{LoginDto, RegisterDto, UserDto},
    server::{
        controller::auth::{get_user, login, logout, register},
        model::{app::AppState, session::user::SessionUserId},
    },
};
use enzonic_test_utils::prelude::*;

use crate::util::json_body;

fn register_request(email: &str) -> RegisterDto {
    RegisterDto {
        email: email.to_string(),
        password: "correct horse battery".to_string(),
        display_name: Some("Player One".to_string()),
    }
}

mod register {
    use super::*;

    #[tokio::test]
    /// Expect 201 with the new user, who is then signed in
    async fn creates_account_and_signs_in() -> Result<(), TestError> {
        let test = TestBuilder::new().with_game_tables().build().await?;
        let state: AppState = test.to_app_state();

        let result = register(
            State(state),
            test.session.clone(),
            Json(register_request(TEST_EMAIL)),
        )
        .await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let user: UserDto = json_body(resp).await;
        assert_eq!(user.email, TEST_EMAIL);
        assert_eq!(user.display_name.as_deref(), Some("Player One"));
        assert_eq!(
            SessionUserId::get(&test.session).await.unwrap(),
            Some(user.id)
        );

        Ok(())
    }

    #[tokio::test]
    /// Expect 409 when the email is already registered, regardless of case
    async fn rejects_taken_email() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_game_tables()
            .with_user(TEST_EMAIL)
            .build()
            .await?;
        let state: AppState = test.to_app_state();

        let result = register(
            State(state),
            test.session.clone(),
            Json(register_request(&TEST_EMAIL.to_uppercase())),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 for a password below the minimum length
    async fn rejects_short_password() -> Result<(), TestError> {
        let test = TestBuilder::new().with_game_tables().build().await?;
        let state: AppState = test.to_app_state();

        let mut request = register_request(TEST_EMAIL);
        request.password = "short".to_string();
        let result = register(State(state), test.session.clone(), Json(request)).await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(matches!(SessionUserId::get(&test.session).await, Ok(None)));

        Ok(())
    }
}

mod login {
    use super::*;

    #[tokio::test]
    /// Expect 200 and a signed in session for the right password
    async fn signs_in_with_correct_password() -> Result<(), TestError> {
        let test = TestBuilder::new().with_game_tables().build().await?;
        let state: AppState = test.to_app_state();
        register(
            State(state.clone()),
            test.session.clone(),
            Json(register_request(TEST_EMAIL)),
        )
        .await
        .unwrap();
        test.session.clear().await;

        let result = login(
            State(state),
            test.session.clone(),
            Json(LoginDto {
                email: format!("  {TEST_EMAIL} "),
                password: "correct horse battery".to_string(),
            }),
        )
        .await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(SessionUserId::get(&test.session).await.unwrap(), Some(1));

        Ok(())
    }

    #[tokio::test]
    /// Expect 401 for a wrong password and for an unknown email
    async fn rejects_invalid_credentials() -> Result<(), TestError> {
        let test = TestBuilder::new().with_game_tables().build().await?;
        let state: AppState = test.to_app_state();
        register(
            State(state.clone()),
            test.session.clone(),
            Json(register_request(TEST_EMAIL)),
        )
        .await
        .unwrap();
        test.session.clear().await;

        for (email, password) in [(TEST_EMAIL, "wrong password"), (TEST_OTHER_EMAIL, "whatever!")] {
            let result = login(
                State(state.clone()),
                test.session.clone(),
                Json(LoginDto {
                    email: email.to_string(),
                    password: password.to_string(),
                }),
            )
            .await;

            let resp = result.err().unwrap().into_response();
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        }
        assert!(matches!(SessionUserId::get(&test.session).await, Ok(None)));

        Ok(())
    }
}

mod logout {
    use super::*;

    #[tokio::test]
    /// Expect a redirect home and an empty session
    async fn clears_session() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_game_tables()
            .with_user(TEST_EMAIL)
            .build()
            .await?;
        SessionUserId::insert(&test.session, 1).await.unwrap();

        let result = logout(test.session.clone()).await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        assert!(matches!(SessionUserId::get(&test.session).await, Ok(None)));

        Ok(())
    }

    #[tokio::test]
    /// Expect a redirect even when nobody is signed in
    async fn redirects_anonymous_session() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let result = logout(test.session.clone()).await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

        Ok(())
    }
}

mod user {
    use super::*;

    #[tokio::test]
    /// Expect 200 with the signed in user
    async fn returns_signed_in_user() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_game_tables()
            .with_user(TEST_EMAIL)
            .build()
            .await?;
        SessionUserId::insert(&test.session, 1).await.unwrap();
        let state: AppState = test.to_app_state();

        let result = get_user(State(state), test.session.clone()).await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let user: UserDto = json_body(resp).await;
        assert_eq!(user.email, TEST_EMAIL);

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 when nobody is signed in
    async fn returns_not_found_without_session() -> Result<(), TestError> {
        let test = TestBuilder::new().with_game_tables().build().await?;
        let state: AppState = test.to_app_state();

        let result = get_user(State(state), test.session.clone()).await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    #[tokio::test]
    /// Expect 500 when the user table does not exist
    async fn error_when_required_tables_dont_exist() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        SessionUserId::insert(&test.session, 1).await.unwrap();
        let state: AppState = test.to_app_state();

        let result = get_user(State(state), test.session.clone()).await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        Ok(())
    }
}
