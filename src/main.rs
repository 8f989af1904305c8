#![allow(non_snake_case)]

mod client;
mod model;

#[cfg(feature = "server")]
use enzonic::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{config::Config, model::app::AppState, startup};

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let session = startup::connect_to_session(&config).await?;
        let db = startup::connect_to_database(&config).await?;
        let media = startup::build_media_store(&config).await?;

        tracing::info!(
            media_dir = %config.media_dir.display(),
            media_url_prefix = %config.media_url_prefix,
            "Starting server"
        );

        let mut router = dioxus::server::router(client::App);
        let server_routes = server::router::routes(&config)
            .with_state(AppState { db, media })
            .layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}
