//! PostgreSQL repository implementations.
//!
//! - [`PgBookRepository`] - Book storage and retrieval

pub mod pg_book_repository;

pub use pg_book_repository::PgBookRepository;
