//! The signed in user, held by one provider for the whole app.

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{api, store::query::QueryCache},
    model::user::UserDto,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<UserDto>,
    /// Set once the initial session lookup finished, successful or not
    pub fetched: bool,
}

impl SessionState {
    pub fn user_id(&self) -> Option<i32> {
        self.user.as_ref().map(|user| user.id)
    }
}

/// Provides the session to its children and loads it from `/api/auth/user` on mount.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut store = use_store(SessionState::default);
    use_context_provider(|| store);

    use_effect(move || {
        if !cfg!(feature = "web") {
            return;
        }

        spawn(async move {
            let user = match api::auth::get_user().await {
                Ok(user) => user,
                Err(err) => {
                    tracing::error!("Failed to load session: {}", err);
                    None
                }
            };

            let mut session = store.write();
            session.user = user;
            session.fetched = true;
        });
    });

    rsx!({ children })
}

/// Record a successful sign in or sign up.
///
/// Cached game details describe the previous viewer's reactions and favorites, so the cache is
/// told the viewer changed.
pub fn sign_in(mut store: Store<SessionState>, cache: QueryCache, user: UserDto) {
    tracing::info!(user_id = %user.id, "Signed in");

    let mut session = store.write();
    session.user = Some(user);
    session.fetched = true;

    cache.viewer_changed();
}

/// Clear the server session, then the local one.
pub async fn sign_out(
    mut store: Store<SessionState>,
    cache: QueryCache,
) -> Result<(), api::ApiError> {
    api::auth::logout().await?;

    store.write().user = None;
    cache.viewer_changed();

    Ok(())
}
