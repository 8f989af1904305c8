use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaTrash;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::{self, game::edit_action},
        components::Page,
        router::Route,
        store::{
            query::{use_query, QueryCache, QueryKey, QueryResult},
            session::SessionState,
            toast::Toasts,
        },
        util::form::use_form_error,
    },
    model::{
        game::{validate_game_text, GameDetailDto, GameDto},
        validation::{allowed_extension, THUMBNAIL_EXTENSIONS},
    },
};

#[component]
pub fn GameEdit(id: i32, error: String, status: u16) -> Element {
    use_form_error(error, status, Route::edit_form(id));

    let session = use_context::<Store<SessionState>>();
    let toasts = use_context::<Toasts>();
    let detail = use_query::<GameDetailDto>(QueryKey::Game(id));

    // None until both the game and the signed in user are known
    let owned = match (&detail, session.read().fetched) {
        (QueryResult::Ready(detail), true) => {
            Some(detail.game.is_owned_by(session.read().user.as_ref()))
        }
        _ => None,
    };

    use_effect(use_reactive!(|(owned,)| {
        if owned == Some(false) {
            toasts.error("Unauthorized", "You can only edit games you uploaded");
            navigator().replace(Route::GameDetails { id });
        }
    }));

    match detail {
        QueryResult::Ready(detail) if owned == Some(true) => rsx! {
            Title { "Edit {detail.game.title} | Enzonic Games" }
            Page { EditForm { game: detail.game } }
        },
        QueryResult::Failed(err) => rsx! {
            Page { p { class: "muted centered-text", "Failed to load game: {err}" } }
        },
        _ => rsx! {
            Page { p { class: "muted centered-text", "Loading game..." } }
        },
    }
}

#[component]
fn EditForm(game: GameDto) -> Element {
    let id = game.id;
    let mut title = use_signal(|| game.title.clone());
    let mut description = use_signal(|| game.description.clone());
    let mut thumbnail_name = use_signal(String::new);

    let problem = validate_game_text(&title.read(), &description.read())
        .err()
        .or_else(|| {
            let name = thumbnail_name.read();
            if name.is_empty() {
                None
            } else {
                allowed_extension(&name, &THUMBNAIL_EXTENSIONS).err()
            }
        });
    let hint = problem.as_ref().map(ToString::to_string).unwrap_or_default();
    let action = edit_action(id);

    rsx! {
        form {
            class: "glass-panel game-form",
            action: "{action}",
            method: "post",
            enctype: "multipart/form-data",
            h1 { "Edit Game" }
            label { class: "field",
                span { "Title" }
                input {
                    class: "input",
                    name: "title",
                    required: true,
                    value: "{title}",
                    oninput: move |evt| title.set(evt.value()),
                }
            }
            label { class: "field",
                span { "Description" }
                textarea {
                    class: "input",
                    name: "description",
                    value: "{description}",
                    oninput: move |evt| description.set(evt.value()),
                }
            }
            label { class: "field",
                span { "New thumbnail (optional)" }
                input {
                    class: "input",
                    r#type: "file",
                    name: "thumbnail",
                    accept: "image/*",
                    onchange: move |evt| thumbnail_name.set(evt.value()),
                }
            }
            if problem.is_some() {
                p { class: "form-error", "{hint}" }
            }
            div { class: "form-actions",
                Link { to: Route::GameDetails { id }, class: "btn btn-outline", "Cancel" }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: problem.is_some(),
                    "Save Changes"
                }
            }
        }
        DeleteGame { game_id: id }
    }
}

/// Delete button that asks for confirmation before removing the game.
#[component]
fn DeleteGame(game_id: i32) -> Element {
    let cache = use_context::<QueryCache>();
    let toasts = use_context::<Toasts>();
    let mut confirming = use_signal(|| false);
    let mut deleting = use_signal(|| false);

    let delete = move |_| {
        deleting.set(true);

        spawn(async move {
            match api::game::delete_game(game_id).await {
                Ok(()) => {
                    cache.invalidate(&QueryKey::Games);
                    cache.invalidate(&QueryKey::Game(game_id));
                    toasts.success("Game deleted", "Your game has been removed");
                    navigator().push(Route::Games {});
                }
                Err(err) => {
                    tracing::error!("Failed to delete game {}: {}", game_id, err);
                    toasts.api_error(&err);
                    deleting.set(false);
                    confirming.set(false);
                }
            }
        });
    };

    rsx! {
        section { class: "glass-panel danger-zone",
            h2 { "Delete Game" }
            if confirming() {
                p { "This removes the game, its comments and reactions. It cannot be undone." }
                div { class: "form-actions",
                    button {
                        class: "btn btn-outline",
                        disabled: deleting(),
                        onclick: move |_| confirming.set(false),
                        "Keep"
                    }
                    button {
                        class: "btn btn-danger",
                        disabled: deleting(),
                        onclick: delete,
                        Icon { width: 14, height: 14, icon: FaTrash }
                        span { "Delete permanently" }
                    }
                }
            } else {
                button {
                    class: "btn btn-danger",
                    onclick: move |_| confirming.set(true),
                    Icon { width: 14, height: 14, icon: FaTrash }
                    span { "Delete" }
                }
            }
        }
    }
}
