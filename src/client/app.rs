use dioxus::prelude::*;

use crate::client::{
    components::Toaster,
    router::Route,
    store::{
        query::{QueryCache, QueryState},
        session::SessionProvider,
        toast::{ToastQueue, Toasts},
    },
};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const FAVICON: Asset = asset!("/assets/favicon.svg");

#[component]
pub fn App() -> Element {
    let queries = use_signal(QueryState::default);
    let toasts = use_signal(ToastQueue::default);
    use_context_provider(|| QueryCache(queries));
    use_context_provider(|| Toasts(toasts));

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Stylesheet { href: MAIN_CSS }
        SessionProvider {
            Router::<Route> {}
            Toaster {}
        }
    }
}
