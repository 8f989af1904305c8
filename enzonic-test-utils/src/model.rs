//! Database model type aliases matching those used by the main crate.

pub type UserModel = entity::user::Model;
pub type GameModel = entity::game::Model;
pub type GameReactionModel = entity::game_reaction::Model;
pub type GameFavoriteModel = entity::game_favorite::Model;
pub type CommentModel = entity::comment::Model;
