//! Core domain entities.
//!
//! - [`Book`] - A persisted book record
//! - [`NewBook`] - Field values for creating or overwriting a book

pub mod book;

pub use book::{Book, NewBook};
