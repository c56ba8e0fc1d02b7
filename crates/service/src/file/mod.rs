pub mod book_store;
