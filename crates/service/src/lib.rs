//! Service layer providing the book collection operations on top of models.
//! - Separates business rules (validation, uniqueness) from HTTP handling.
//! - Reuses validation and record definitions in the `models` crate.
//! - Persists through the file-backed stores in `storage`.

pub mod errors;
pub mod runtime;
pub mod storage;
pub mod books;
pub mod file;
