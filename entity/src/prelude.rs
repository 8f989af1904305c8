pub use super::comment::Entity as Comment;
pub use super::game::Entity as Game;
pub use super::game_favorite::Entity as GameFavorite;
pub use super::game_reaction::Entity as GameReaction;
pub use super::user::Entity as User;
