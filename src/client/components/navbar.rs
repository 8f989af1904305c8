use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaGamepad;
use dioxus_free_icons::Icon;

use crate::client::{
    components::UploadButton,
    store::{
        query::QueryCache,
        session::{sign_out, SessionState},
        toast::Toasts,
    },
};

pub use crate::client::router::Route;

#[component]
pub fn Navbar() -> Element {
    let session = use_context::<Store<SessionState>>();
    let toasts = use_context::<Toasts>();
    let cache = use_context::<QueryCache>();

    let on_sign_out = move |_| {
        spawn(async move {
            match sign_out(session, cache).await {
                Ok(()) => {
                    toasts.success("Signed out", "See you next time");
                    navigator().push(Route::Home {});
                }
                Err(err) => toasts.api_error(&err),
            }
        });
    };

    let state = session.read();
    let user_label = state.user.as_ref().map(|user| user.label().to_string());

    rsx! {
        header {
            class: "navbar glass",
            Link { to: Route::Home {}, class: "navbar-brand",
                Icon { width: 32, height: 32, icon: FaGamepad }
                span { class: "neon-text", "ENZONIC" }
            }
            nav {
                ul { class: "navbar-links",
                    li { Link { to: Route::Home {}, "Home" } }
                    li { Link { to: Route::Games {}, "Games" } }
                }
            }
            div { class: "navbar-end",
                UploadButton {}
                if let Some(label) = user_label {
                    span { class: "navbar-user", "{label}" }
                    button { class: "btn btn-outline", onclick: on_sign_out, "Sign Out" }
                } else if state.fetched {
                    Link { to: Route::Auth {}, class: "btn btn-primary", "Sign In" }
                }
            }
        }

        Outlet::<Route> {}
    }
}
