use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::{
    client::{
        components::{GameCard, Page},
        router::Route,
        store::query::{use_query, QueryKey, QueryResult},
    },
    model::game::GameDto,
};

const FEATURED_COUNT: usize = 4;
const CATEGORIES: [&str; 5] = ["Action", "Adventure", "Strategy", "RPG", "Puzzle"];

#[component]
pub fn Home() -> Element {
    let games = use_query::<Vec<GameDto>>(QueryKey::Games);

    let featured = match games {
        QueryResult::Loading => rsx! { p { class: "muted", "Loading games..." } },
        QueryResult::Failed(err) => rsx! { p { class: "muted", "Games unavailable: {err}" } },
        QueryResult::Ready(games) if games.is_empty() => rsx! {
            p { class: "muted", "No games yet. Upload the first one!" }
        },
        QueryResult::Ready(games) => rsx! {
            div { class: "game-grid",
                for game in games.into_iter().take(FEATURED_COUNT) {
                    GameCard { key: "{game.id}", game }
                }
            }
        },
    };

    rsx!(
        Title { "Enzonic Games" }
        Meta {
            name: "description",
            content: "Play, rate and share games made by the Enzonic community."
        }
        Page {
            section { class: "glass-panel hero",
                h1 { class: "neon-text", "Welcome to Enzonic Games" }
                p { class: "muted",
                    "Play games from the community, leave a like, and share your own creations."
                }
                Link { to: Route::Games {}, class: "btn btn-primary", "Browse Games" }
            }

            section {
                h2 { "Featured Games" }
                {featured}
            }

            section { class: "glass-panel",
                h2 { "Categories" }
                div { class: "chips",
                    for category in CATEGORIES {
                        Link { to: Route::Games {}, class: "chip", "{category}" }
                    }
                }
            }
        }
    )
}
