use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaMagnifyingGlass;
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::{GameCard, Page, UploadButton},
        store::query::{use_query, QueryKey, QueryResult},
    },
    model::game::GameDto,
};

#[component]
pub fn Games() -> Element {
    let mut search = use_signal(String::new);
    let games = use_query::<Vec<GameDto>>(QueryKey::Games);

    let results = match games {
        QueryResult::Loading => rsx! { p { class: "muted", "Loading games..." } },
        QueryResult::Failed(err) => rsx! { p { class: "muted", "Games unavailable: {err}" } },
        QueryResult::Ready(games) => {
            let query = search.read().trim().to_string();
            let matching: Vec<GameDto> = games
                .into_iter()
                .filter(|game| game.matches_search(&query))
                .collect();

            if matching.is_empty() {
                rsx! { p { class: "muted", "No games found." } }
            } else {
                rsx! {
                    div { class: "game-grid",
                        for game in matching {
                            GameCard { key: "{game.id}", game }
                        }
                    }
                }
            }
        }
    };

    rsx!(
        Title { "Games | Enzonic Games" }
        Page {
            div { class: "page-header",
                h1 { "Games" }
                UploadButton {}
            }
            label { class: "search glass",
                Icon { width: 16, height: 16, icon: FaMagnifyingGlass }
                input {
                    r#type: "search",
                    placeholder: "Search by title or description",
                    value: "{search}",
                    oninput: move |evt| search.set(evt.value()),
                }
            }
            {results}
        }
    )
}
