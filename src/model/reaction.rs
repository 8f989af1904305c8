use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl ReactionKind {
    pub fn opposite(self) -> Self {
        match self {
            Self::Like => Self::Dislike,
            Self::Dislike => Self::Like,
        }
    }
}

/// Request body for reacting to a game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ReactionDto {
    pub kind: ReactionKind,
}

/// Like and dislike totals for a game plus the viewer's own reaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ReactionSummaryDto {
    pub likes: u64,
    pub dislikes: u64,
    pub user_reaction: Option<ReactionKind>,
}

/// Effect of a react request on the single reaction a user may hold for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionChange {
    /// No prior reaction, the kind is stored
    Insert(ReactionKind),
    /// Prior reaction of the opposite kind is overwritten
    Replace {
        from: ReactionKind,
        to: ReactionKind,
    },
    /// Reacting with the same kind again removes it
    Remove(ReactionKind),
}

impl ReactionChange {
    pub fn resolve(prior: Option<ReactionKind>, desired: ReactionKind) -> Self {
        match prior {
            Some(prior) if prior == desired => Self::Remove(prior),
            Some(prior) => Self::Replace {
                from: prior,
                to: desired,
            },
            None => Self::Insert(desired),
        }
    }

    /// Reaction held after the change is applied.
    pub fn outcome(self) -> Option<ReactionKind> {
        match self {
            Self::Insert(kind) | Self::Replace { to: kind, .. } => Some(kind),
            Self::Remove(_) => None,
        }
    }
}

impl ReactionSummaryDto {
    /// Summary after the viewer reacts with `desired`, keeping one reaction per user.
    pub fn react(self, desired: ReactionKind) -> Self {
        self.apply(ReactionChange::resolve(self.user_reaction, desired))
    }

    pub fn apply(mut self, change: ReactionChange) -> Self {
        match change {
            ReactionChange::Insert(kind) => self.increment(kind),
            ReactionChange::Replace { from, to } => {
                self.decrement(from);
                self.increment(to);
            }
            ReactionChange::Remove(kind) => self.decrement(kind),
        }

        self.user_reaction = change.outcome();
        self
    }

    pub fn count(&self, kind: ReactionKind) -> u64 {
        match kind {
            ReactionKind::Like => self.likes,
            ReactionKind::Dislike => self.dislikes,
        }
    }

    fn counter(&mut self, kind: ReactionKind) -> &mut u64 {
        match kind {
            ReactionKind::Like => &mut self.likes,
            ReactionKind::Dislike => &mut self.dislikes,
        }
    }

    fn increment(&mut self, kind: ReactionKind) {
        *self.counter(kind) += 1;
    }

    fn decrement(&mut self, kind: ReactionKind) {
        let counter = self.counter(kind);
        *counter = counter.saturating_sub(1);
    }
}

/// Favorite state of a game for the viewer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FavoriteDto {
    pub favorited: bool,
    pub favorites: u64,
}

impl FavoriteDto {
    pub fn toggle(self) -> Self {
        if self.favorited {
            Self {
                favorited: false,
                favorites: self.favorites.saturating_sub(1),
            }
        } else {
            Self {
                favorited: true,
                favorites: self.favorites + 1,
            }
        }
    }
}
