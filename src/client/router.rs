use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Auth, GameDetails, GameEdit, GameUpload, Games, Home, NotFound},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/games")]
    Games {},

    // A failed form post comes back with `error` and `status`
    #[route("/games/upload?:error&:status")]
    GameUpload { error: String, status: u16 },

    #[route("/games/:id")]
    GameDetails { id: i32 },

    #[route("/games/:id/edit?:error&:status")]
    GameEdit { id: i32, error: String, status: u16 },

    #[route("/auth")]
    Auth {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// The upload form without an error to report.
    pub fn upload_form() -> Self {
        Self::GameUpload {
            error: String::new(),
            status: 0,
        }
    }

    /// The edit form for `id` without an error to report.
    pub fn edit_form(id: i32) -> Self {
        Self::GameEdit {
            id,
            error: String::new(),
            status: 0,
        }
    }
}
