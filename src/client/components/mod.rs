pub mod comment;
pub mod comment_section;
pub mod favorite_button;
pub mod game_card;
pub mod navbar;
pub mod page;
pub mod reaction_bar;
pub mod toaster;
pub mod upload_button;

pub use comment::CommentItem;
pub use comment_section::CommentSection;
pub use favorite_button::FavoriteButton;
pub use game_card::GameCard;
pub use navbar::Navbar;
pub use page::Page;
pub use reaction_bar::ReactionBar;
pub use toaster::Toaster;
pub use upload_button::UploadButton;
