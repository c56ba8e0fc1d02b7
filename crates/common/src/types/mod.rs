use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// `{"message": ..., "book": ...}` envelope used by every mutating endpoint
/// and by error bodies (where `book` is left out).
#[derive(Serialize, Debug)]
pub struct MessageResponse<T> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book: Option<T>,
}

impl<T> MessageResponse<T> {
    pub fn message(message: impl Into<String>) -> Self {
        Self { message: message.into(), book: None }
    }

    pub fn with_book(message: impl Into<String>, book: T) -> Self {
        Self { message: message.into(), book: Some(book) }
    }
}
