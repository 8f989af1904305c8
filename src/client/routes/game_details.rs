use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaArrowUpRightFromSquare, FaDownload, FaPenToSquare,
};
use dioxus_free_icons::Icon;

use crate::{
    client::{
        api::ApiError,
        components::{game_card::PLACEHOLDER_THUMBNAIL, CommentSection, FavoriteButton, Page, ReactionBar},
        router::Route,
        store::{
            query::{use_query, QueryKey, QueryResult},
            session::SessionState,
        },
        util::time::time_ago,
    },
    model::game::{GameDetailDto, GameDto, MediaKind},
};

#[component]
pub fn GameDetails(id: i32) -> Element {
    let session = use_context::<Store<SessionState>>();
    let detail = use_query::<GameDetailDto>(QueryKey::Game(id));

    let detail = match detail {
        QueryResult::Loading => {
            return rsx! {
                Page { p { class: "muted centered-text", "Loading game details..." } }
            }
        }
        QueryResult::Failed(ApiError::NotFound) => {
            return rsx! {
                Title { "Game not found | Enzonic Games" }
                Page { p { class: "muted centered-text", "Game not found" } }
            }
        }
        QueryResult::Failed(err) => {
            return rsx! {
                Page { p { class: "muted centered-text", "Failed to load game: {err}" } }
            }
        }
        QueryResult::Ready(detail) => detail,
    };

    let game = detail.game;
    let owned = game.is_owned_by(session.read().user.as_ref());
    let thumbnail = game
        .thumbnail_url
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_THUMBNAIL.to_string());
    let updated = time_ago(game.updated_at);

    rsx! {
        Title { "{game.title} | Enzonic Games" }
        Page {
            article { class: "game-detail",
                div { class: "glass-panel game-summary",
                    img { class: "game-detail-image", src: "{thumbnail}", alt: "{game.title}" }
                    div { class: "game-summary-body",
                        div { class: "page-header",
                            h1 { "{game.title}" }
                            if owned {
                                Link { to: Route::edit_form(game.id), class: "btn btn-outline",
                                    Icon { width: 14, height: 14, icon: FaPenToSquare }
                                    span { "Edit" }
                                }
                            }
                        }
                        p { class: "muted", "Updated {updated}" }
                        p { class: "game-description", "{game.description}" }
                        div { class: "game-actions",
                            ReactionBar { game_id: game.id, summary: detail.reactions }
                            FavoriteButton { game_id: game.id, favorite: detail.favorite }
                        }
                    }
                }

                PlayPanel { game: game.clone() }

                CommentSection { game_id: game.id }
            }
        }
    }
}

/// How to play the game: an embedded frame, an external link, or a download.
#[component]
fn PlayPanel(game: GameDto) -> Element {
    let Some(url) = game.media_url.clone() else {
        return rsx! {};
    };

    match game.media_kind {
        MediaKind::Embed => {
            let src = game.embed_src().unwrap_or(url);

            rsx! {
                section { class: "play-panel",
                    h2 { "Play Game" }
                    div { class: "play-frame",
                        iframe {
                            src: "{src}",
                            title: "{game.title}",
                            // Uploaded pages run scripts without access to the app's origin
                            "sandbox": "allow-scripts allow-pointer-lock allow-popups",
                            allowfullscreen: true,
                            allow: "gamepad; fullscreen",
                        }
                    }
                }
            }
        }
        MediaKind::Link => rsx! {
            section { class: "play-panel",
                a { class: "btn btn-primary", href: "{url}", target: "_blank", rel: "noopener noreferrer",
                    Icon { width: 16, height: 16, icon: FaArrowUpRightFromSquare }
                    span { "Play on external site" }
                }
            }
        },
        MediaKind::Download => rsx! {
            section { class: "play-panel",
                a { class: "btn btn-primary", href: "{url}", download: "",
                    Icon { width: 16, height: 16, icon: FaDownload }
                    span { "Download" }
                }
            }
        },
    }
}
