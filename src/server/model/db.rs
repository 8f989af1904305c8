//! Database model type aliases.
//!
//! Short names for the `entity` crate models used across repositories and services.

/// Registered account.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `email` - Unique, stored lowercased
/// - `password_hash` - Argon2id PHC string
/// - `display_name` - Optional name shown on comments
/// - `created_at` - Account creation time
pub type UserModel = entity::user::Model;

/// Uploaded game owned by a user.
pub type GameModel = entity::game::Model;

/// A user's single reaction to a game, keyed by `(user_id, game_id)`.
pub type GameReactionModel = entity::game_reaction::Model;

/// Presence of a game in a user's favorites, keyed by `(user_id, game_id)`.
pub type GameFavoriteModel = entity::game_favorite::Model;

/// Comment left on a game.
pub type CommentModel = entity::comment::Model;

impl From<entity::game::MediaKind> for crate::model::game::MediaKind {
    fn from(kind: entity::game::MediaKind) -> Self {
        match kind {
            entity::game::MediaKind::Embed => Self::Embed,
            entity::game::MediaKind::Link => Self::Link,
            entity::game::MediaKind::Download => Self::Download,
        }
    }
}

impl From<crate::model::game::MediaKind> for entity::game::MediaKind {
    fn from(kind: crate::model::game::MediaKind) -> Self {
        match kind {
            crate::model::game::MediaKind::Embed => Self::Embed,
            crate::model::game::MediaKind::Link => Self::Link,
            crate::model::game::MediaKind::Download => Self::Download,
        }
    }
}

impl From<entity::game_reaction::ReactionKind> for crate::model::reaction::ReactionKind {
    fn from(kind: entity::game_reaction::ReactionKind) -> Self {
        match kind {
            entity::game_reaction::ReactionKind::Like => Self::Like,
            entity::game_reaction::ReactionKind::Dislike => Self::Dislike,
        }
    }
}

impl From<crate::model::reaction::ReactionKind> for entity::game_reaction::ReactionKind {
    fn from(kind: crate::model::reaction::ReactionKind) -> Self {
        match kind {
            crate::model::reaction::ReactionKind::Like => Self::Like,
            crate::model::reaction::ReactionKind::Dislike => Self::Dislike,
        }
    }
}

impl From<GameModel> for crate::model::game::GameDto {
    fn from(game: GameModel) -> Self {
        Self {
            id: game.id,
            title: game.title,
            description: game.description,
            thumbnail_url: game.thumbnail_url,
            media_kind: game.media_kind.into(),
            media_url: game.media_url,
            owner_id: game.user_id,
            created_at: game.created_at,
            updated_at: game.updated_at,
        }
    }
}

impl From<UserModel> for crate::model::user::UserDto {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            email: user.email,
            display_name: user.display_name,
        }
    }
}
