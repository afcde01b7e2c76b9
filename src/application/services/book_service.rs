//! Book management service.

use crate::domain::entities::{Book, NewBook};
use crate::domain::repositories::BookRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Service for the book resource.
///
/// Turns repository "absent" signals into [`AppError::NotFound`] with the
/// `ID {id} : Does not exist` message clients rely on.
pub struct BookService {
    repository: Arc<dyn BookRepository>,
}

impl BookService {
    /// Creates a new book service.
    pub fn new(repository: Arc<dyn BookRepository>) -> Self {
        Self { repository }
    }

    /// Lists all stored books.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_books(&self) -> Result<Vec<Book>, AppError> {
        self.repository.list().await
    }

    /// Creates a book and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_book(&self, new_book: NewBook) -> Result<Book, AppError> {
        let book = self.repository.create(new_book).await?;
        tracing::info!(book_id = book.id, "Book created");
        Ok(book)
    }

    /// Retrieves a single book.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no book has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_book(&self, id: i64) -> Result<Book, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Overwrites all writable fields of an existing book.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no book has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_book(&self, id: i64, fields: NewBook) -> Result<Book, AppError> {
        let book = self
            .repository
            .update(id, fields)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(book_id = id, "Book updated");
        Ok(book)
    }

    /// Deletes a book and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no book has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_book(&self, id: i64) -> Result<i64, AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!(book_id = id, "Book deleted");
        Ok(id)
    }

    /// Checks storage connectivity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the database is unreachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

fn not_found(id: i64) -> AppError {
    AppError::not_found(format!("ID {id} : Does not exist"))
}
