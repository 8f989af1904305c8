//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue},
    Router,
};
use tower_http::{services::ServeDir, set_header::SetResponseHeader};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{config::Config, controller, model::app::AppState};

/// Uploaded files may be HTML games. They may run scripts but get an opaque origin, so they can
/// not read session cookies or call the API as the viewer.
pub const MEDIA_CONTENT_SECURITY_POLICY: &str =
    "sandbox allow-scripts allow-pointer-lock allow-popups";

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered together so each path maps to one method router.
///
/// # Registered Endpoints
/// - `POST /api/auth/register`, `POST /api/auth/login`, `GET /api/auth/logout`,
///   `GET /api/auth/user`
/// - `GET|POST /api/games`, `GET|POST|DELETE /api/games/{id}`
/// - `PUT /api/games/{id}/reaction`, `PUT /api/games/{id}/favorite`
/// - `GET|POST /api/games/{id}/comments`, `DELETE /api/comments/{id}`
///
/// Uploaded media is served from [`Config::media_dir`] when [`Config::media_url_prefix`] is a
/// local path. Those responses carry a sandboxing `Content-Security-Policy` so uploaded pages
/// never run with the app's origin. The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes(&config).with_state(AppState { db, media });
/// ```
pub fn routes(config: &Config) -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Enzonic Games", description = "Enzonic Games API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Account and session API routes"),
        (name = controller::game::GAME_TAG, description = "Game catalog and upload API routes"),
        (name = controller::reaction::REACTION_TAG, description = "Like, dislike and favorite API routes"),
        (name = controller::comment::COMMENT_TAG, description = "Comment API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(
            controller::game::list_games,
            controller::game::create_game
        ))
        .routes(routes!(
            controller::game::get_game,
            controller::game::update_game,
            controller::game::delete_game
        ))
        .routes(routes!(controller::reaction::react))
        .routes(routes!(controller::reaction::toggle_favorite))
        .routes(routes!(
            controller::comment::get_comments,
            controller::comment::create_comment
        ))
        .routes(routes!(controller::comment::delete_comment))
        .split_for_parts();

    let mut routes = routes
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    // An absolute prefix points at a CDN or another host serving the files
    if config.media_url_prefix.starts_with('/') {
        let media = SetResponseHeader::overriding(
            ServeDir::new(&config.media_dir),
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static(MEDIA_CONTENT_SECURITY_POLICY),
        );
        routes = routes.nest_service(&config.media_url_prefix, media);
    }

    routes
}
