use crate::errors::ServiceError;
use async_trait::async_trait;
use models::book::{Book, BookUpdate, NewBook};

/// Trait abstraction for the book collection.
/// Implementations can be file-backed, database-backed, or in-memory.
#[async_trait]
pub trait BookStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Book>, ServiceError>;
    async fn get(&self, isbn: &str) -> Result<Book, ServiceError>;
    async fn create(&self, input: NewBook) -> Result<Book, ServiceError>;
    async fn update(&self, isbn: &str, input: BookUpdate) -> Result<Book, ServiceError>;
    async fn delete(&self, isbn: &str) -> Result<Book, ServiceError>;
}
