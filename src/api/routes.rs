//! API route configuration.
//!
//! All routes here require the `X-API-Key` header via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    create_book_handler, delete_book_handler, get_book_handler, list_books_handler,
    update_book_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All book routes, protected by API key authentication.
///
/// # Endpoints
///
/// - `GET    /books`            - List books
/// - `POST   /books`            - Create a book
/// - `GET    /books/{book_id}`  - Fetch one book
/// - `PUT    /books/{book_id}`  - Overwrite a book
/// - `DELETE /books/{book_id}`  - Delete a book
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_books_handler).post(create_book_handler))
        .route(
            "/books/{book_id}",
            get(get_book_handler)
                .put(update_book_handler)
                .delete(delete_book_handler),
        )
}
