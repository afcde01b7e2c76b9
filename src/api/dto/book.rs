//! DTOs for the book endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Book, NewBook};

/// Request body for `POST /api/v1/books/` and `PUT /api/v1/books/{book_id}`.
///
/// Lengths are counted in characters, not bytes.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BookRequest {
    #[validate(length(min = 1, message = "String should have at least 1 character"))]
    pub title: String,

    #[validate(length(
        min = 1,
        max = 100,
        message = "String should have between 1 and 100 characters"
    ))]
    pub author: String,

    #[validate(length(
        min = 1,
        max = 100,
        message = "String should have between 1 and 100 characters"
    ))]
    pub description: String,

    #[validate(range(
        min = 0,
        max = 100,
        message = "Input should be between 0 and 100 inclusive"
    ))]
    pub rating: i32,
}

impl From<BookRequest> for NewBook {
    fn from(req: BookRequest) -> Self {
        NewBook {
            title: req.title,
            author: req.author,
            description: req.description,
            rating: req.rating,
        }
    }
}

/// JSON representation of a stored book.
#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub description: String,
    pub rating: i32,
}

impl From<Book> for BookResponse {
    fn from(b: Book) -> Self {
        BookResponse {
            id: b.id,
            title: b.title,
            author: b.author,
            description: b.description,
            rating: b.rating,
        }
    }
}

/// Response for `DELETE /api/v1/books/{book_id}`.
#[derive(Debug, Serialize)]
pub struct DeleteBookResponse {
    pub deleted_id: i64,
}
