//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, BookService};
use crate::domain::repositories::BookRepository;

/// Immutable per-process state.
///
/// Holds the configured API key (inside [`AuthService`]) and the storage handle
/// (inside [`BookService`]). Nothing here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub book_service: Arc<BookService>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    /// Wires services on top of a repository and the configured API key.
    pub fn new(book_repository: Arc<dyn BookRepository>, api_key: Option<String>) -> Self {
        Self {
            book_service: Arc::new(BookService::new(book_repository)),
            auth_service: Arc::new(AuthService::new(api_key)),
        }
    }
}
