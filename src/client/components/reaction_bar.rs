use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaThumbsDown, FaThumbsUp};
use dioxus_free_icons::Icon;

use crate::{
    client::{
        api,
        store::{
            query::{QueryCache, QueryKey},
            reaction::OptimisticReaction,
            session::SessionState,
            toast::Toasts,
        },
    },
    model::reaction::{ReactionKind, ReactionSummaryDto},
};

/// Like and dislike buttons with their totals.
#[component]
pub fn ReactionBar(game_id: i32, summary: ReactionSummaryDto) -> Element {
    let session = use_context::<Store<SessionState>>();
    let toasts = use_context::<Toasts>();
    let cache = use_context::<QueryCache>();
    let mut cell = use_signal(|| OptimisticReaction::new(summary));

    // Refetched game details carry the latest totals
    use_effect(use_reactive!(|(summary,)| cell.write().sync(summary)));

    let mut react = move |kind: ReactionKind| {
        let viewer = session.read().user_id();
        let seq = match cell.write().react_as(viewer, kind) {
            Ok(seq) => seq,
            Err(err) => {
                toasts.api_error(&err);
                return;
            }
        };

        spawn(async move {
            match api::reaction::react(game_id, kind).await {
                Ok(summary) => {
                    cell.write().settle_ok(seq, summary);
                    cache.invalidate(&QueryKey::Game(game_id));
                }
                Err(err) => {
                    cell.write().settle_err(seq);
                    toasts.api_error(&err);
                }
            }
        });
    };

    let displayed = cell.read().displayed();
    let liked = displayed.user_reaction == Some(ReactionKind::Like);
    let disliked = displayed.user_reaction == Some(ReactionKind::Dislike);
    let like_class = if liked { "btn btn-reaction active" } else { "btn btn-reaction" };
    let dislike_class = if disliked { "btn btn-reaction active" } else { "btn btn-reaction" };

    rsx! {
        div { class: "reaction-bar",
            button {
                class: like_class,
                aria_pressed: "{liked}",
                onclick: move |_| react(ReactionKind::Like),
                Icon { width: 16, height: 16, icon: FaThumbsUp }
                span { "{displayed.likes}" }
            }
            button {
                class: dislike_class,
                aria_pressed: "{disliked}",
                onclick: move |_| react(ReactionKind::Dislike),
                Icon { width: 16, height: 16, icon: FaThumbsDown }
                span { "{displayed.dislikes}" }
            }
        }
    }
}
