//! PostgreSQL implementation of book repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Book, NewBook};
use crate::domain::repositories::BookRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct BookRow {
    id: i64,
    title: String,
    author: String,
    description: String,
    rating: i32,
}

impl From<BookRow> for Book {
    fn from(r: BookRow) -> Self {
        Book::new(r.id, r.title, r.author, r.description, r.rating)
    }
}

/// PostgreSQL repository for books.
///
/// Writes run inside a transaction that is committed explicitly. An early return
/// drops the transaction, which rolls it back and hands the connection back to
/// the pool.
pub struct PgBookRepository {
    pool: Arc<PgPool>,
}

impl PgBookRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for PgBookRepository {
    async fn create(&self, new_book: NewBook) -> Result<Book, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, BookRow>(
            r#"
            INSERT INTO books (title, author, description, rating)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, author, description, rating
            "#,
        )
        .bind(&new_book.title)
        .bind(&new_book.author)
        .bind(&new_book.description)
        .bind(new_book.rating)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<Book>, AppError> {
        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, author, description, rating
            FROM books
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, AppError> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, author, description, rating
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Book::from))
    }

    async fn update(&self, id: i64, fields: NewBook) -> Result<Option<Book>, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, BookRow>(
            r#"
            UPDATE books SET
                title       = $2,
                author      = $3,
                description = $4,
                rating      = $5
            WHERE id = $1
            RETURNING id, title, author, description, rating
            "#,
        )
        .bind(id)
        .bind(&fields.title)
        .bind(&fields.author)
        .bind(&fields.description)
        .bind(fields.rating)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row.map(Book::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
