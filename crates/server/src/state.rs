use std::sync::Arc;

use service::books::BookStore;

/// Shared handler state: the storage handle injected at startup.
#[derive(Clone)]
pub struct AppState {
    pub books: Arc<dyn BookStore>,
}

impl AppState {
    pub fn new(books: Arc<dyn BookStore>) -> Self {
        Self { books }
    }
}
