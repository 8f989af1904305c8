pub mod form;
pub mod time;
