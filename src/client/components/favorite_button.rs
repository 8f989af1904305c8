use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaHeart;
use dioxus_free_icons::Icon;

use crate::{
    client::{
        api,
        store::{
            query::{QueryCache, QueryKey},
            reaction::OptimisticFavorite,
            session::SessionState,
            toast::Toasts,
        },
    },
    model::reaction::FavoriteDto,
};

#[component]
pub fn FavoriteButton(game_id: i32, favorite: FavoriteDto) -> Element {
    let session = use_context::<Store<SessionState>>();
    let toasts = use_context::<Toasts>();
    let cache = use_context::<QueryCache>();
    let mut cell = use_signal(|| OptimisticFavorite::new(favorite));

    use_effect(use_reactive!(|(favorite,)| cell.write().sync(favorite)));

    let onclick = move |_| {
        let viewer = session.read().user_id();
        let seq = match cell.write().toggle_as(viewer) {
            Ok(seq) => seq,
            Err(err) => {
                toasts.api_error(&err);
                return;
            }
        };

        spawn(async move {
            match api::reaction::toggle_favorite(game_id).await {
                Ok(favorite) => {
                    cell.write().settle_ok(seq, favorite);
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
    let class = if displayed.favorited { "btn btn-favorite active" } else { "btn btn-favorite" };
    let label = if displayed.favorited { "Favorited" } else { "Favorite" };

    rsx! {
        button {
            class,
            aria_pressed: "{displayed.favorited}",
            onclick,
            Icon { width: 16, height: 16, icon: FaHeart }
            span { "{label}" }
            span { class: "count", "{displayed.favorites}" }
        }
    }
}
