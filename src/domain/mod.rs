pub mod category;
pub mod comment;
pub mod errors;
pub mod pagination;
pub mod post;
pub mod user;
