pub mod errors;
pub mod book;
pub mod isbn;
