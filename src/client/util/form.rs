use dioxus::prelude::*;

use crate::client::{api::ApiError, router::Route, store::toast::Toasts};

/// Show the error a failed form post was redirected back with, then drop it from the URL.
pub fn use_form_error(error: String, status: u16, form: Route) {
    let toasts = use_context::<Toasts>();

    use_effect(use_reactive!(|(error, status)| {
        if error.is_empty() {
            return;
        }

        toasts.api_error(&ApiError::from_status(status, Some(error)));
        navigator().replace(form.clone());
    }));
}
