//! Business logic services for the application layer.

pub mod auth_service;
pub mod book_service;

pub use auth_service::AuthService;
pub use book_service::BookService;
