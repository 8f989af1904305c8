use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, RegisterDto, UserDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::{auth::AuthError, Error},
        model::{app::AppState, session::user::SessionUserId},
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Create an account and sign it in
///
/// # Responses
/// - 201 (Created): Account created, the session now belongs to the new user
/// - 400 (Bad Request): Invalid email, short password, or display name too long
/// - 409 (Conflict): An account with this email already exists
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created and signed in", body = UserDto),
        (status = 400, description = "Invalid registration details", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<RegisterDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AuthService::new(&state.db).register(request).await?;

    // Fresh session ID on sign in so a pre-auth cookie can't be reused
    session.cycle_id().await?;
    SessionUserId::insert(&session, user.id).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Sign in with email and password
///
/// # Responses
/// - 200 (OK): Signed in
/// - 401 (Unauthorized): Unknown email or wrong password
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Signed in", body = UserDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AuthService::new(&state.db).login(request).await?;

    session.cycle_id().await?;
    SessionUserId::insert(&session, user.id).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Logs the user out by clearing their session
///
/// # Responses
/// - 307 (Temporary Redirect): Successfully logged out, redirect to the home page
/// - 500 (Internal Server Error): There was an issue clearing the session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Signed out, redirect to the home page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    // Clearing a session that was never stored fails, so only clear a signed in one
    if SessionUserId::get(&session).await?.is_some() {
        session.clear().await;
    }

    Ok(Redirect::temporary("/"))
}

/// Get the signed in user
///
/// # Responses
/// - 200 (OK): The signed in user
/// - 404 (Not Found): No user in session, or the session user no longer exists
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signed in user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    match get_user_from_session(&state, &session).await {
        Ok(user) => Ok((StatusCode::OK, Json(user)).into_response()),
        Err(Error::AuthError(AuthError::UserNotInSession | AuthError::UserNotInDatabase(_))) => {
            Ok((
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "User not found".to_string(),
                }),
            )
                .into_response())
        }
        Err(e) => Err(e),
    }
}
