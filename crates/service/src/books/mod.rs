//! Book collection operations and the storage seam handlers depend on.

pub mod store;

pub use store::BookStore;
