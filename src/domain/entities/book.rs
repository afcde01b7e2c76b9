//! Domain entity representing a book.

/// A persisted book.
///
/// `id` is assigned by storage on creation and never changes or gets reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub description: String,
    pub rating: i32,
}

impl Book {
    /// Creates a new Book instance.
    pub fn new(id: i64, title: String, author: String, description: String, rating: i32) -> Self {
        Self {
            id,
            title,
            author,
            description,
            rating,
        }
    }

    /// Returns the writable fields of this book, without the id.
    pub fn fields(&self) -> NewBook {
        NewBook {
            title: self.title.clone(),
            author: self.author.clone(),
            description: self.description.clone(),
            rating: self.rating,
        }
    }
}

/// Input data for creating a book or overwriting all fields of an existing one.
///
/// Field constraints are enforced at the API boundary before a `NewBook` is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub description: String,
    pub rating: i32,
}
