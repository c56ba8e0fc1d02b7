use std::sync::Arc;
use models::book::{Book, BookUpdate, NewBook};
use tracing::info;
use crate::books::BookStore;
use crate::errors::ServiceError;
use crate::storage::json_list_store::JsonListStore;

/// File storage: the book collection persisted as a JSON array.
#[derive(Clone)]
pub struct FileBookStore {
    store: Arc<JsonListStore<Book>>,
}

impl FileBookStore {
    /// Initialize the store; creates an empty collection file if missing.
    pub async fn new<P: Into<std::path::PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let store = JsonListStore::<Book>::new(path).await?;
        Ok(Arc::new(Self { store }))
    }

    pub fn path(&self) -> &std::path::Path {
        self.store.path()
    }

    /// All books in insertion order.
    pub async fn list(&self) -> Result<Vec<Book>, ServiceError> {
        self.store.load().await
    }

    pub async fn get(&self, isbn: &str) -> Result<Book, ServiceError> {
        self.store
            .load()
            .await?
            .into_iter()
            .find(|b| b.isbn == isbn)
            .ok_or_else(|| ServiceError::not_found("Book"))
    }

    /// Validate, reject duplicate isbn, append.
    pub async fn create(&self, input: NewBook) -> Result<Book, ServiceError> {
        let book = input.validate()?;
        let created = self
            .store
            .mutate(|books| {
                if books.iter().any(|b| b.isbn == book.isbn) {
                    return Err(ServiceError::Conflict("ISBN already exists".into()));
                }
                books.push(book.clone());
                Ok(book)
            })
            .await?;
        info!(isbn = %created.isbn, "book added");
        Ok(created)
    }

    /// Replace the mutable fields of the book with this isbn, in place.
    pub async fn update(&self, isbn: &str, input: BookUpdate) -> Result<Book, ServiceError> {
        let changes = input.validate()?;
        let updated = self
            .store
            .mutate(|books| {
                let existing = books
                    .iter_mut()
                    .find(|b| b.isbn == isbn)
                    .ok_or_else(|| ServiceError::not_found("Book"))?;
                existing.apply(changes);
                Ok(existing.clone())
            })
            .await?;
        info!(%isbn, "book updated");
        Ok(updated)
    }

    /// Remove the book; the remaining order is preserved.
    pub async fn delete(&self, isbn: &str) -> Result<Book, ServiceError> {
        let removed = self
            .store
            .mutate(|books| {
                let idx = books
                    .iter()
                    .position(|b| b.isbn == isbn)
                    .ok_or_else(|| ServiceError::not_found("Book"))?;
                Ok(books.remove(idx))
            })
            .await?;
        info!(%isbn, "book deleted");
        Ok(removed)
    }
}

#[async_trait::async_trait]
impl BookStore for FileBookStore {
    async fn list(&self) -> Result<Vec<Book>, ServiceError> { self.list().await }
    async fn get(&self, isbn: &str) -> Result<Book, ServiceError> { self.get(isbn).await }
    async fn create(&self, input: NewBook) -> Result<Book, ServiceError> { self.create(input).await }
    async fn update(&self, isbn: &str, input: BookUpdate) -> Result<Book, ServiceError> { self.update(isbn, input).await }
    async fn delete(&self, isbn: &str) -> Result<Book, ServiceError> { self.delete(isbn).await }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    async fn setup_store() -> (Arc<FileBookStore>, std::path::PathBuf) {
        let tmp = std::env::temp_dir().join(format!("svc_books_{}.json", Uuid::new_v4()));
        let store = FileBookStore::new(&tmp).await.expect("store init");
        (store, tmp)
    }

    fn input(title: &str, isbn: &str) -> NewBook {
        NewBook {
            title: Some(title.into()),
            author: Some("Herbert".into()),
            publisher: Some("Chilton".into()),
            published_date: Some("1965".into()),
            isbn: Some(isbn.into()),
        }
    }

    fn update(title: &str) -> BookUpdate {
        BookUpdate {
            title: Some(title.into()),
            author: Some("Frank Herbert".into()),
            publisher: Some("Putnam".into()),
            published_date: Some("1969".into()),
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_same_record() -> Result<(), anyhow::Error> {
        let (store, tmp) = setup_store().await;
        let created = store.create(input("Dune", "9780441013593")).await?;
        assert_eq!(created.title, "Dune");
        assert_eq!(store.get("9780441013593").await?, created);
        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_isbn_conflicts_and_leaves_collection_unchanged() -> Result<(), anyhow::Error> {
        let (store, tmp) = setup_store().await;
        store.create(input("Dune", "1")).await?;
        let res = store.create(input("Other", "1")).await;
        assert!(matches!(res, Err(ServiceError::Conflict(_))));
        let books = store.list().await?;
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Dune");
        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn invalid_input_is_rejected_before_touching_storage() -> Result<(), anyhow::Error> {
        let (store, tmp) = setup_store().await;
        let mut missing = input("Dune", "1");
        missing.publisher = None;
        assert!(matches!(store.create(missing).await, Err(ServiceError::Model(_))));
        assert!(matches!(store.create(input("Dune", "97-8")).await, Err(ServiceError::Model(_))));
        assert!(store.list().await?.is_empty());
        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn update_replaces_fields_in_place_and_keeps_order() -> Result<(), anyhow::Error> {
        let (store, tmp) = setup_store().await;
        store.create(input("A", "1")).await?;
        store.create(input("B", "2")).await?;
        store.create(input("C", "3")).await?;

        let updated = store.update("2", update("B2")).await?;
        assert_eq!(updated.isbn, "2");
        assert_eq!(updated.publisher, "Putnam");

        let titles: Vec<_> = store.list().await?.into_iter().map(|b| b.title).collect();
        assert_eq!(titles, vec!["A", "B2", "C"]);
        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_isbn_is_not_found_and_changes_nothing() -> Result<(), anyhow::Error> {
        let (store, tmp) = setup_store().await;
        store.create(input("A", "1")).await?;
        let before = tokio::fs::read_to_string(&tmp).await?;
        assert!(matches!(store.update("404", update("X")).await, Err(ServiceError::NotFound(_))));
        assert_eq!(tokio::fs::read_to_string(&tmp).await?, before);
        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn update_with_missing_field_is_invalid_even_for_unknown_isbn() -> Result<(), anyhow::Error> {
        let (store, tmp) = setup_store().await;
        let partial = BookUpdate { title: Some("only".into()), ..Default::default() };
        assert!(matches!(store.update("404", partial).await, Err(ServiceError::Model(_))));
        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_and_returns_record() -> Result<(), anyhow::Error> {
        let (store, tmp) = setup_store().await;
        store.create(input("A", "1")).await?;
        store.create(input("B", "2")).await?;
        store.create(input("C", "3")).await?;

        let removed = store.delete("2").await?;
        assert_eq!(removed.title, "B");
        assert!(matches!(store.get("2").await, Err(ServiceError::NotFound(_))));
        assert!(matches!(store.delete("2").await, Err(ServiceError::NotFound(_))));

        let isbns: Vec<_> = store.list().await?.into_iter().map(|b| b.isbn).collect();
        assert_eq!(isbns, vec!["1", "3"]);
        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn collection_survives_reopen() -> Result<(), anyhow::Error> {
        let (store, tmp) = setup_store().await;
        store.create(input("Dune", "0441013597")).await?;
        drop(store);

        let reopened = FileBookStore::new(&tmp).await?;
        let books = reopened.list().await?;
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].isbn, "0441013597");
        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
