use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        api,
        components::Page,
        router::Route,
        store::{
            query::QueryCache,
            session::{sign_in, SessionState},
            toast::Toasts,
        },
    },
    model::user::{LoginDto, RegisterDto},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    SignIn,
    SignUp,
}

#[component]
pub fn Auth() -> Element {
    let session = use_context::<Store<SessionState>>();
    let toasts = use_context::<Toasts>();
    let cache = use_context::<QueryCache>();
    let mut mode = use_signal(|| Mode::SignIn);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut display_name = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let on_submit = move |_| {
        let current = mode();
        let email = email();
        let password = password();
        let display_name = display_name();

        submitting.set(true);
        spawn(async move {
            let result = match current {
                Mode::SignIn => api::auth::login(&LoginDto { email, password }).await,
                Mode::SignUp => {
                    let request = RegisterDto {
                        email,
                        password,
                        display_name: Some(display_name).filter(|name| !name.trim().is_empty()),
                    };

                    // Same checks as the server, without the round trip
                    match request.validate() {
                        Ok(request) => api::auth::register(&request).await,
                        Err(err) => Err(api::ApiError::Validation(err.to_string())),
                    }
                }
            };

            match result {
                Ok(user) => {
                    let welcome = format!("Welcome, {}", user.label());
                    sign_in(session, cache, user);
                    toasts.success("Signed in", welcome);
                    navigator().push(Route::Home {});
                }
                Err(err) => toasts.api_error(&err),
            }
            submitting.set(false);
        });
    };

    if let Some(user) = session.read().user.as_ref() {
        let label = user.label().to_string();

        return rsx! {
            Title { "Sign in | Enzonic Games" }
            Page { class: "centered",
                div { class: "glass-panel auth-card",
                    p { "You are signed in as {label}." }
                    Link { to: Route::Home {}, class: "btn btn-primary", "Go home" }
                }
            }
        };
    }

    let signing_up = mode() == Mode::SignUp;
    let heading = if signing_up { "Create an account" } else { "Sign in" };
    let submit_label = if signing_up { "Sign Up" } else { "Sign In" };
    let password_autocomplete = if signing_up {
        "new-password"
    } else {
        "current-password"
    };
    let toggle_label = if signing_up {
        "Already have an account? Sign in"
    } else {
        "New here? Create an account"
    };

    rsx! {
        Title { "Sign in | Enzonic Games" }
        Page { class: "centered",
            div { class: "glass-panel auth-card",
                h1 { class: "neon-text", "{heading}" }
                label { class: "field",
                    span { "Email" }
                    input {
                        class: "input",
                        r#type: "email",
                        autocomplete: "email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                label { class: "field",
                    span { "Password" }
                    input {
                        class: "input",
                        r#type: "password",
                        autocomplete: password_autocomplete,
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                if signing_up {
                    label { class: "field",
                        span { "Display name (optional)" }
                        input {
                            class: "input",
                            value: "{display_name}",
                            oninput: move |evt| display_name.set(evt.value()),
                        }
                    }
                }
                button {
                    class: "btn btn-primary",
                    disabled: submitting(),
                    onclick: on_submit,
                    "{submit_label}"
                }
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| mode.set(if signing_up { Mode::SignIn } else { Mode::SignUp }),
                    "{toggle_label}"
                }
            }
        }
    }
}
