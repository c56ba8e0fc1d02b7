use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::isbn::is_numeric_like;

/// A stored book. Field order here is the field order in the data file.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub published_date: String,
    pub isbn: String,
}

/// Create payload. Every field is optional at the wire level so that a
/// missing field is reported as a validation error, not a decode error.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub publisher: Option<String>,
    pub published_date: Option<String>,
    pub isbn: Option<String>,
}

/// Replacement payload for an update; the isbn comes from the path and any
/// `isbn` in the body is ignored.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub publisher: Option<String>,
    pub published_date: Option<String>,
}

/// Absent, `null` and `""` all count as missing.
fn present(field: Option<String>) -> Option<String> {
    field.filter(|v| !v.is_empty())
}

impl NewBook {
    /// Presence check first, then the isbn shape check.
    pub fn validate(self) -> Result<Book, ModelError> {
        let (Some(title), Some(author), Some(publisher), Some(published_date), Some(isbn)) = (
            present(self.title),
            present(self.author),
            present(self.publisher),
            present(self.published_date),
            present(self.isbn),
        ) else {
            return Err(ModelError::MissingFields);
        };
        if !is_numeric_like(&isbn) {
            return Err(ModelError::InvalidIsbn);
        }
        Ok(Book { title, author, publisher, published_date, isbn })
    }
}

/// Validated replacement values for the mutable fields of a [`Book`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookChanges {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub published_date: String,
}

impl BookUpdate {
    pub fn validate(self) -> Result<BookChanges, ModelError> {
        match (
            present(self.title),
            present(self.author),
            present(self.publisher),
            present(self.published_date),
        ) {
            (Some(title), Some(author), Some(publisher), Some(published_date)) => {
                Ok(BookChanges { title, author, publisher, published_date })
            }
            _ => Err(ModelError::MissingFields),
        }
    }
}

impl Book {
    /// Replace every field except `isbn`.
    pub fn apply(&mut self, changes: BookChanges) {
        self.title = changes.title;
        self.author = changes.author;
        self.publisher = changes.publisher;
        self.published_date = changes.published_date;
    }
}
