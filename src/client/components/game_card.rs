use dioxus::prelude::*;

use crate::{client::router::Route, model::game::GameDto};

pub const PLACEHOLDER_THUMBNAIL: Asset = asset!("/assets/placeholder.svg");

#[component]
pub fn GameCard(game: GameDto) -> Element {
    let thumbnail = game
        .thumbnail_url
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_THUMBNAIL.to_string());

    rsx! {
        Link { to: Route::GameDetails { id: game.id }, class: "game-card glass",
            img { class: "game-card-image", src: "{thumbnail}", alt: "{game.title}" }
            div { class: "game-card-body",
                h3 { class: "game-card-title", "{game.title}" }
                p { class: "game-card-description", "{game.description}" }
            }
        }
    }
}
