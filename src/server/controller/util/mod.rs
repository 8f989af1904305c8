//! Helpers shared by controllers: resolving the signed in user, parsing multipart forms and
//! answering failed form posts.

pub mod form;
pub mod get_user;
pub mod multipart;
