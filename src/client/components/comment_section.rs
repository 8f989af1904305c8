use dioxus::prelude::*;

use crate::{
    client::{
        api::{self, ApiError},
        components::CommentItem,
        router::Route,
        store::{
            query::{use_query, QueryCache, QueryKey, QueryResult},
            session::SessionState,
            toast::Toasts,
        },
    },
    model::comment::{validate_comment, CommentDto},
};

#[component]
pub fn CommentSection(game_id: i32) -> Element {
    let session = use_context::<Store<SessionState>>();
    let toasts = use_context::<Toasts>();
    let cache = use_context::<QueryCache>();
    let mut content = use_signal(String::new);
    let mut posting = use_signal(|| false);

    let comments = use_query::<Vec<CommentDto>>(QueryKey::Comments(game_id));

    let on_post = move |_| {
        if session.read().user.is_none() {
            toasts.api_error(&ApiError::Unauthenticated);
            return;
        }

        // Blank comments never leave the browser
        let text = match validate_comment(&content.read()) {
            Ok(text) => text,
            Err(err) => {
                toasts.error("Check your input", err.to_string());
                return;
            }
        };

        posting.set(true);
        spawn(async move {
            match api::comment::create_comment(game_id, &text).await {
                Ok(_) => {
                    content.set(String::new());
                    cache.invalidate(&QueryKey::Comments(game_id));
                    toasts.success("Comment posted", "");
                }
                Err(err) => toasts.api_error(&err),
            }
            posting.set(false);
        });
    };

    let signed_in = session.read().user.is_some();

    let list = match comments {
        QueryResult::Loading => rsx! { p { class: "muted", "Loading comments..." } },
        QueryResult::Failed(err) => rsx! { p { class: "muted", "Comments unavailable: {err}" } },
        QueryResult::Ready(comments) if comments.is_empty() => rsx! {
            p { class: "muted", "No comments yet. Be the first!" }
        },
        QueryResult::Ready(comments) => rsx! {
            div { class: "comment-list",
                for comment in comments {
                    CommentItem { key: "{comment.id}", comment }
                }
            }
        },
    };

    rsx! {
        section { class: "comment-section",
            h2 { "Comments" }
            if signed_in {
                div { class: "comment-form",
                    textarea {
                        class: "input",
                        placeholder: "Write a comment...",
                        value: "{content}",
                        oninput: move |evt| content.set(evt.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: posting() || content.read().trim().is_empty(),
                        onclick: on_post,
                        "Post Comment"
                    }
                }
            } else {
                p { class: "muted",
                    Link { to: Route::Auth {}, "Sign in" }
                    " to join the discussion."
                }
            }
            {list}
        }
    }
}
