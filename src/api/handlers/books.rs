//! Handlers for the book resource (list, create, get, update, delete).
//!
//! All of these sit behind [`crate::api::middleware::auth`]; they only run once
//! the API key has been accepted.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use validator::Validate;

use crate::api::dto::book::{BookRequest, BookResponse, DeleteBookResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all books.
///
/// # Endpoint
///
/// `GET /api/v1/books/`
pub async fn list_books_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookResponse>>, AppError> {
    let books = state.book_service.list_books().await?;

    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

/// Creates a book.
///
/// # Endpoint
///
/// `POST /api/v1/books/`
///
/// # Request Body
///
/// ```json
/// { "title": "Dune", "author": "Herbert", "description": "Desert planet", "rating": 95 }
/// ```
///
/// # Errors
///
/// Returns 422 if the body is malformed or violates field constraints.
pub async fn create_book_handler(
    State(state): State<AppState>,
    payload: Result<Json<BookRequest>, JsonRejection>,
) -> Result<Json<BookResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let book = state.book_service.create_book(payload.into()).await?;

    Ok(Json(book.into()))
}

/// Returns a single book.
///
/// # Endpoint
///
/// `GET /api/v1/books/{book_id}`
///
/// # Errors
///
/// Returns 404 if the book does not exist.
pub async fn get_book_handler(
    State(state): State<AppState>,
    book_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<BookResponse>, AppError> {
    let Path(book_id) = book_id?;

    let book = state.book_service.get_book(book_id).await?;

    Ok(Json(book.into()))
}

/// Overwrites title, author, description and rating of a book.
///
/// # Endpoint
///
/// `PUT /api/v1/books/{book_id}`
///
/// # Errors
///
/// Returns 422 if the body is malformed or violates field constraints.
/// Returns 404 if the book does not exist.
pub async fn update_book_handler(
    State(state): State<AppState>,
    book_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<BookRequest>, JsonRejection>,
) -> Result<Json<BookResponse>, AppError> {
    let Path(book_id) = book_id?;
    let Json(payload) = payload?;
    payload.validate()?;

    let book = state
        .book_service
        .update_book(book_id, payload.into())
        .await?;

    Ok(Json(book.into()))
}

/// Hard-deletes a book.
///
/// # Endpoint
///
/// `DELETE /api/v1/books/{book_id}`
///
/// # Response
///
/// ```json
/// { "deleted_id": 1 }
/// ```
///
/// # Errors
///
/// Returns 404 if the book does not exist.
pub async fn delete_book_handler(
    State(state): State<AppState>,
    book_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeleteBookResponse>, AppError> {
    let Path(book_id) = book_id?;

    let deleted_id = state.book_service.delete_book(book_id).await?;

    Ok(Json(DeleteBookResponse { deleted_id }))
}
