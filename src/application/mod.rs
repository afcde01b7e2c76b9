//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP handlers.
//!
//! - [`services::book_service::BookService`] - Book CRUD and not-found handling
//! - [`services::auth_service::AuthService`] - API key validation

pub mod services;
