//! Repository trait for book storage.

use crate::domain::entities::{Book, NewBook};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the `books` table.
///
/// Absence is reported through `Option`/`bool` return values, never as an error.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBookRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Inserts a new book and returns it with its generated id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on constraint violations or database errors.
    async fn create(&self, new_book: NewBook) -> Result<Book, AppError>;

    /// Returns every stored book.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Book>, AppError>;

    /// Finds a book by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, AppError>;

    /// Overwrites title, author, description and rating of the book with `id`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Book))` with the updated record
    /// - `Ok(None)` if no book has this id
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on constraint violations or database errors.
    async fn update(&self, id: i64, fields: NewBook) -> Result<Option<Book>, AppError>;

    /// Deletes the book with `id`.
    ///
    /// Returns `true` if a row was removed, `false` if none matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Checks that storage is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the database cannot be queried.
    async fn ping(&self) -> Result<(), AppError>;
}
