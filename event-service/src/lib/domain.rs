pub mod comment;
pub mod event;
pub mod pagination;
pub mod user;
