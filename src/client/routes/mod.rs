pub mod auth;
pub mod game_details;
pub mod game_edit;
pub mod game_upload;
pub mod games;
pub mod home;
pub mod not_found;

pub use auth::Auth;
pub use game_details::GameDetails;
pub use game_edit::GameEdit;
pub use game_upload::GameUpload;
pub use games::Games;
pub use home::Home;
pub use not_found::NotFound;
