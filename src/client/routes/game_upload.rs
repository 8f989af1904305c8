use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        api::game::UPLOAD_ACTION, components::Page, router::Route, store::session::SessionState,
        util::form::use_form_error,
    },
    model::{
        game::{validate_game_text, MediaKind},
        validation::{allowed_extension, ValidationError, GAME_FILE_EXTENSIONS, THUMBNAIL_EXTENSIONS},
    },
};

/// The first problem that would make the server reject the upload form.
///
/// `file_name` and `thumbnail_name` are the file inputs' values, empty when nothing is chosen.
pub fn upload_problem(
    title: &str,
    description: &str,
    media_url: &str,
    file_name: &str,
    thumbnail_name: &str,
) -> Option<ValidationError> {
    if let Err(err) = validate_game_text(title, description) {
        return Some(err);
    }

    if !thumbnail_name.is_empty() {
        if let Err(err) = allowed_extension(thumbnail_name, &THUMBNAIL_EXTENSIONS) {
            return Some(err);
        }
    }

    if !file_name.is_empty() {
        return allowed_extension(file_name, &GAME_FILE_EXTENSIONS).err();
    }

    let url = media_url.trim();
    if url.is_empty() {
        Some(ValidationError::MissingMedia)
    } else if !(url.starts_with("https://") || url.starts_with("http://")) {
        Some(ValidationError::InvalidMediaUrl)
    } else {
        None
    }
}

#[component]
pub fn GameUpload(error: String, status: u16) -> Element {
    use_form_error(error, status, Route::upload_form());

    let session = use_context::<Store<SessionState>>();
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut media_kind = use_signal(|| MediaKind::Embed.as_str().to_string());
    let mut media_url = use_signal(String::new);
    let mut file_name = use_signal(String::new);
    let mut thumbnail_name = use_signal(String::new);

    if session.read().user.is_none() {
        return rsx! {
            Title { "Upload | Enzonic Games" }
            Page { class: "centered",
                div { class: "glass-panel auth-card",
                    p { "Sign in to upload a game." }
                    Link { to: Route::Auth {}, class: "btn btn-primary", "Sign In" }
                }
            }
        };
    }

    let problem = upload_problem(
        &title.read(),
        &description.read(),
        &media_url.read(),
        &file_name.read(),
        &thumbnail_name.read(),
    );
    let touched = !title.read().is_empty();
    let hint = problem.as_ref().map(ToString::to_string).unwrap_or_default();
    let file_accept = GAME_FILE_EXTENSIONS.map(|ext| format!(".{ext}")).join(",");

    rsx! {
        Title { "Upload | Enzonic Games" }
        Page {
            form {
                class: "glass-panel game-form",
                action: UPLOAD_ACTION,
                method: "post",
                enctype: "multipart/form-data",
                h1 { "Upload Game" }
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
                    span { "How is it played?" }
                    select {
                        class: "input",
                        name: "media_kind",
                        value: "{media_kind}",
                        onchange: move |evt| media_kind.set(evt.value()),
                        option { value: "embed", "Play in the page" }
                        option { value: "link", "Link to another site" }
                        option { value: "download", "Download" }
                    }
                }
                label { class: "field",
                    span { "Game file (.sb3, .html or .zip)" }
                    input {
                        class: "input",
                        r#type: "file",
                        name: "file",
                        accept: "{file_accept}",
                        onchange: move |evt| file_name.set(evt.value()),
                    }
                }
                label { class: "field",
                    span { "Or a URL to the game" }
                    input {
                        class: "input",
                        r#type: "url",
                        name: "media_url",
                        placeholder: "https://",
                        value: "{media_url}",
                        oninput: move |evt| media_url.set(evt.value()),
                    }
                }
                label { class: "field",
                    span { "Thumbnail (optional)" }
                    input {
                        class: "input",
                        r#type: "file",
                        name: "thumbnail",
                        accept: "image/*",
                        onchange: move |evt| thumbnail_name.set(evt.value()),
                    }
                }
                if touched && problem.is_some() {
                    p { class: "form-error", "{hint}" }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: problem.is_some(),
                    "Upload"
                }
            }
        }
    }
}
