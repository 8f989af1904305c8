use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaUpload;
use dioxus_free_icons::Icon;

use crate::client::{
    router::Route,
    store::{session::SessionState, toast::Toasts},
};

/// Goes to the upload form, or to sign in for anonymous visitors.
#[component]
pub fn UploadButton() -> Element {
    let session = use_context::<Store<SessionState>>();
    let toasts = use_context::<Toasts>();

    let onclick = move |_| {
        if session.read().user.is_some() {
            navigator().push(Route::upload_form());
        } else {
            toasts.error("Sign in required", "Sign in to upload a game");
            navigator().push(Route::Auth {});
        }
    };

    rsx! {
        button { class: "btn btn-accent", onclick,
            Icon { width: 16, height: 16, icon: FaUpload }
            span { "Upload Game" }
        }
    }
}
