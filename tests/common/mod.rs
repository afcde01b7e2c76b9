#![allow(dead_code)]

use async_trait::async_trait;
use axum::http::{HeaderName, HeaderValue};
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use books_api::domain::entities::{Book, NewBook};
use books_api::domain::repositories::BookRepository;
use books_api::error::AppError;
use books_api::state::AppState;

pub const TEST_API_KEY: &str = "test-api-key";

pub fn api_key_header() -> HeaderName {
    HeaderName::from_static("x-api-key")
}

pub fn api_key_value() -> HeaderValue {
    HeaderValue::from_static(TEST_API_KEY)
}

/// `BookRepository` backed by a map, with ids that are never reused.
#[derive(Default)]
pub struct InMemoryBookRepository {
    inner: Mutex<Store>,
    fail: bool,
}

#[derive(Default)]
struct Store {
    next_id: i64,
    books: BTreeMap<i64, Book>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every call fails like an unreachable database.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().books.len()
    }

    pub fn snapshot(&self) -> Vec<Book> {
        self.inner.lock().unwrap().books.values().cloned().collect()
    }

    fn check(&self) -> Result<(), AppError> {
        if self.fail {
            return Err(AppError::internal(
                "Database error",
                json!({"error": "connection refused"}),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn create(&self, new_book: NewBook) -> Result<Book, AppError> {
        self.check()?;
        let mut store = self.inner.lock().unwrap();
        store.next_id += 1;
        let id = store.next_id;
        let book = Book::new(
            id,
            new_book.title,
            new_book.author,
            new_book.description,
            new_book.rating,
        );
        store.books.insert(id, book.clone());
        Ok(book)
    }

    async fn list(&self) -> Result<Vec<Book>, AppError> {
        self.check()?;
        Ok(self.snapshot())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, AppError> {
        self.check()?;
        Ok(self.inner.lock().unwrap().books.get(&id).cloned())
    }

    async fn update(&self, id: i64, fields: NewBook) -> Result<Option<Book>, AppError> {
        self.check()?;
        let mut store = self.inner.lock().unwrap();
        Ok(store.books.get_mut(&id).map(|book| {
            book.title = fields.title;
            book.author = fields.author;
            book.description = fields.description;
            book.rating = fields.rating;
            book.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        self.check()?;
        Ok(self.inner.lock().unwrap().books.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }
}

pub fn create_test_state(api_key: Option<&str>) -> (AppState, Arc<InMemoryBookRepository>) {
    create_test_state_with(InMemoryBookRepository::new(), api_key)
}

pub fn create_test_state_with(
    repo: InMemoryBookRepository,
    api_key: Option<&str>,
) -> (AppState, Arc<InMemoryBookRepository>) {
    let repo = Arc::new(repo);
    let state = AppState::new(repo.clone(), api_key.map(str::to_string));
    (state, repo)
}

pub fn dune() -> Value {
    book_body("Dune", "Herbert", "Desert planet", 95)
}

pub fn book_body(title: &str, author: &str, description: &str, rating: i64) -> Value {
    json!({
        "title": title,
        "author": author,
        "description": description,
        "rating": rating
    })
}
