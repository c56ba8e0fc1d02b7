use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("All fields are required")]
    MissingFields,
    #[error("ISBN must be a valid number")]
    InvalidIsbn,
}
