//! Cache of fetched API data keyed by what was asked for.
//!
//! Every [`QueryKey`] has a generation. A fetch records the generation it started under and its
//! result is only stored if the generation is unchanged when it completes. Invalidating a key
//! bumps the generation, which both schedules a refetch and drops the responses of fetches that
//! were already running. At most one fetch per key and generation is in flight, so components
//! rendering the same key share a single request.

use std::collections::HashMap;

use dioxus::prelude::*;
use dioxus_logger::tracing;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::api::{self, ApiError};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// The whole catalog, newest first
    Games,
    /// One game with reaction totals and favorite state
    Game(i32),
    /// Comments on a game
    Comments(i32),
}

impl QueryKey {
    /// Whether the response carries state specific to the signed in user.
    pub fn depends_on_viewer(&self) -> bool {
        matches!(self, Self::Game(_))
    }
}

/// Proof that a fetch was started for a key under a generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    key: QueryKey,
    generation: u64,
}

#[derive(Debug, Default)]
struct Entry {
    generation: u64,
    in_flight: Option<u64>,
    /// Generation the stored result was fetched under
    fetched: Option<u64>,
    result: Option<Result<Value, ApiError>>,
}

/// What a component rendering a query sees.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult<T> {
    Loading,
    Ready(T),
    Failed(ApiError),
}

#[derive(Debug, Default)]
pub struct QueryState {
    entries: HashMap<QueryKey, Entry>,
}

impl QueryState {
    /// Whether `key` has no result for its current generation and nothing fetching it.
    pub fn needs_fetch(&self, key: &QueryKey) -> bool {
        match self.entries.get(key) {
            Some(entry) => {
                entry.fetched != Some(entry.generation) && entry.in_flight != Some(entry.generation)
            }
            None => true,
        }
    }

    /// Start a fetch for `key`, or `None` when one is not needed.
    pub fn begin(&mut self, key: QueryKey) -> Option<FetchTicket> {
        if !self.needs_fetch(&key) {
            return None;
        }

        let entry = self.entries.entry(key.clone()).or_default();
        entry.in_flight = Some(entry.generation);

        Some(FetchTicket {
            key,
            generation: entry.generation,
        })
    }

    /// Store the result of a fetch. Returns `false` when the key was invalidated meanwhile and
    /// the result was dropped.
    pub fn complete(&mut self, ticket: FetchTicket, result: Result<Value, ApiError>) -> bool {
        let entry = self.entries.entry(ticket.key).or_default();

        if entry.in_flight == Some(ticket.generation) {
            entry.in_flight = None;
        }

        if entry.generation != ticket.generation {
            return false;
        }

        entry.fetched = Some(ticket.generation);
        entry.result = Some(result);

        true
    }

    /// Mark `key` stale. The previous result stays readable until the refetch lands.
    pub fn invalidate(&mut self, key: &QueryKey) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.generation += 1;
        }
    }

    /// Mark every key stale after the signed in user changed.
    ///
    /// Results carrying the previous viewer's state are dropped so they are never shown to the
    /// new one; other results stay readable until their refetch lands.
    pub fn viewer_changed(&mut self) {
        for (key, entry) in self.entries.iter_mut() {
            entry.generation += 1;

            if key.depends_on_viewer() {
                entry.fetched = None;
                entry.result = None;
            }
        }
    }

    pub fn generation(&self, key: &QueryKey) -> u64 {
        self.entries.get(key).map_or(0, |entry| entry.generation)
    }

    pub fn result<T: DeserializeOwned>(&self, key: &QueryKey) -> QueryResult<T> {
        match self.entries.get(key).and_then(|entry| entry.result.as_ref()) {
            Some(Ok(value)) => match T::deserialize(value) {
                Ok(data) => QueryResult::Ready(data),
                Err(e) => QueryResult::Failed(ApiError::RemoteFailure(format!(
                    "Failed to read cached data: {}",
                    e
                ))),
            },
            Some(Err(err)) => QueryResult::Failed(err.clone()),
            None => QueryResult::Loading,
        }
    }
}

/// Handle to the query cache provided by [`App`](crate::client::App).
#[derive(Clone, Copy, PartialEq)]
pub struct QueryCache(pub Signal<QueryState>);

impl QueryCache {
    pub fn invalidate(mut self, key: &QueryKey) {
        self.0.write().invalidate(key);
    }

    pub fn viewer_changed(mut self) {
        self.0.write().viewer_changed();
    }

    async fn run(mut self, key: QueryKey) {
        let Some(ticket) = self.0.write().begin(key) else {
            return;
        };

        let result = fetch(&ticket.key).await;
        if let Err(err) = &result {
            tracing::warn!("Failed to fetch {:?}: {}", ticket.key, err);
        }

        let key = ticket.key.clone();
        if !self.0.write().complete(ticket, result) {
            tracing::debug!("Dropped response for invalidated query {:?}", key);
        }
    }
}

async fn fetch(key: &QueryKey) -> Result<Value, ApiError> {
    fn encode<T: serde::Serialize>(data: T) -> Result<Value, ApiError> {
        serde_json::to_value(data)
            .map_err(|e| ApiError::RemoteFailure(format!("Failed to cache response: {}", e)))
    }

    match key {
        QueryKey::Games => encode(api::game::get_games().await?),
        QueryKey::Game(id) => encode(api::game::get_game(*id).await?),
        QueryKey::Comments(id) => encode(api::comment::get_comments(*id).await?),
    }
}

/// Read `key` from the cache, fetching it when it is missing or stale.
///
/// Fetches only run in the browser; server rendering shows the loading state.
pub fn use_query<T: DeserializeOwned>(key: QueryKey) -> QueryResult<T> {
    let cache = use_context::<QueryCache>();

    if cfg!(feature = "web") && cache.0.peek().needs_fetch(&key) {
        let key = key.clone();
        spawn(async move { cache.run(key).await });
    }

    let state = cache.0.read();
    state.result(&key)
}
