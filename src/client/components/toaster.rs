use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaXmark;
use dioxus_free_icons::Icon;

use crate::client::store::toast::{Toast, ToastKind, Toasts};

#[component]
pub fn Toaster() -> Element {
    let toasts = use_context::<Toasts>();
    let queue = toasts.0.read();

    rsx! {
        div { class: "toaster",
            {queue.toasts().iter().cloned().map(|toast| rsx! {
                ToastItem { key: "{toast.id}", toast, toasts }
            })}
        }
    }
}

#[component]
fn ToastItem(toast: Toast, toasts: Toasts) -> Element {
    let class = match toast.kind {
        ToastKind::Success => "toast toast-success",
        ToastKind::Error => "toast toast-error",
    };
    let id = toast.id;

    rsx! {
        div { class, role: "status",
            div {
                p { class: "toast-title", "{toast.title}" }
                if !toast.message.is_empty() {
                    p { class: "toast-message", "{toast.message}" }
                }
            }
            button {
                class: "toast-dismiss",
                aria_label: "Dismiss",
                onclick: move |_| toasts.dismiss(id),
                Icon { width: 14, height: 14, icon: FaXmark }
            }
        }
    }
}
