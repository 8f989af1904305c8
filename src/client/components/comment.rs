use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaTrash;
use dioxus_free_icons::Icon;

use crate::{
    client::{
        api,
        store::{
            query::{QueryCache, QueryKey},
            session::SessionState,
            toast::Toasts,
        },
        util::time::time_ago,
    },
    model::comment::CommentDto,
};

#[component]
pub fn CommentItem(comment: CommentDto) -> Element {
    let session = use_context::<Store<SessionState>>();
    let toasts = use_context::<Toasts>();
    let cache = use_context::<QueryCache>();
    let mut deleting = use_signal(|| false);

    let can_delete = comment.can_delete(session.read().user.as_ref());
    let comment_id = comment.id;
    let game_id = comment.game_id;
    let posted = time_ago(comment.created_at);

    let on_delete = move |_| {
        deleting.set(true);

        spawn(async move {
            match api::comment::delete_comment(comment_id).await {
                Ok(()) => {
                    cache.invalidate(&QueryKey::Comments(game_id));
                    toasts.success("Comment deleted", "");
                }
                Err(err) => toasts.api_error(&err),
            }
            deleting.set(false);
        });
    };

    rsx! {
        article { class: "comment glass",
            div { class: "comment-header",
                span { class: "comment-author", "{comment.author_name}" }
                span { class: "comment-time", "{posted}" }
                if can_delete {
                    button {
                        class: "btn btn-ghost",
                        aria_label: "Delete comment",
                        disabled: deleting(),
                        onclick: on_delete,
                        Icon { width: 14, height: 14, icon: FaTrash }
                    }
                }
            }
            p { class: "comment-content", "{comment.content}" }
        }
    }
}
