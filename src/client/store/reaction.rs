//! Optimistic values reconciled against server responses.
//!
//! Each change is numbered. The newest request alone decides what is displayed; responses to
//! older requests only move the confirmed baseline forward, so a late response can never
//! overwrite the result of a newer action.

use crate::{
    client::api::ApiError,
    model::reaction::{FavoriteDto, ReactionKind, ReactionSummaryDto},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optimistic<T> {
    confirmed: T,
    confirmed_seq: u64,
    displayed: T,
    seq: u64,
    in_flight: u32,
}

/// Like and dislike totals for one game.
pub type OptimisticReaction = Optimistic<ReactionSummaryDto>;

/// Favorite state for one game.
pub type OptimisticFavorite = Optimistic<FavoriteDto>;

impl<T: Copy + PartialEq> Optimistic<T> {
    pub fn new(value: T) -> Self {
        Self {
            confirmed: value,
            confirmed_seq: 0,
            displayed: value,
            seq: 0,
            in_flight: 0,
        }
    }

    pub fn displayed(&self) -> T {
        self.displayed
    }

    pub fn confirmed(&self) -> T {
        self.confirmed
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight > 0
    }

    /// Apply a change locally and return the sequence number of its request.
    pub fn begin(&mut self, change: impl FnOnce(T) -> T) -> u64 {
        self.seq += 1;
        self.in_flight += 1;
        self.displayed = change(self.displayed);

        self.seq
    }

    /// Record the server's value for request `seq`.
    pub fn settle_ok(&mut self, seq: u64, value: T) {
        self.in_flight = self.in_flight.saturating_sub(1);

        if seq > self.confirmed_seq {
            self.confirmed = value;
            self.confirmed_seq = seq;
        }

        if seq == self.seq {
            self.displayed = value;
        }
    }

    /// Request `seq` failed: roll the display back to the confirmed value if it was the newest.
    pub fn settle_err(&mut self, seq: u64) {
        self.in_flight = self.in_flight.saturating_sub(1);

        if seq == self.seq {
            self.displayed = self.confirmed;
        }
    }

    /// Adopt freshly fetched data unless a request is still in flight.
    pub fn sync(&mut self, value: T) {
        if self.in_flight == 0 && self.confirmed != value {
            self.confirmed = value;
            self.displayed = value;
        }
    }
}

impl OptimisticReaction {
    pub fn react(&mut self, kind: ReactionKind) -> u64 {
        self.begin(|summary| summary.react(kind))
    }

    /// React on behalf of `viewer`. Without a signed in user nothing changes and no request
    /// should be sent.
    pub fn react_as(&mut self, viewer: Option<i32>, kind: ReactionKind) -> Result<u64, ApiError> {
        viewer.ok_or(ApiError::Unauthenticated)?;

        Ok(self.react(kind))
    }
}

impl OptimisticFavorite {
    pub fn toggle(&mut self) -> u64 {
        self.begin(FavoriteDto::toggle)
    }

    pub fn toggle_as(&mut self, viewer: Option<i32>) -> Result<u64, ApiError> {
        viewer.ok_or(ApiError::Unauthenticated)?;

        Ok(self.toggle())
    }
}
