//! The in-memory record store
//!
//! Two append-only collections (books, authors) guarded by a single lock.
//! Constructed once at process start and shared with every resolver through
//! the GraphQL context. All lookups are linear scans, which is fine at the
//! collection sizes this serves.

mod records;
mod seed;

pub use records::{Author, Book};
pub use seed::{load_seed, save_seed, SeedData};

use crate::error::{Result, ShelfqlError};
use std::sync::RwLock;

#[derive(Debug, Default)]
struct StoreInner {
    books: Vec<Book>,
    authors: Vec<Author>,
}

/// Holder of the book and author collections.
///
/// Identifier assignment (`len + 1`) and the author-name uniqueness check
/// must each be atomic with respect to concurrent mutations, so `create_*`
/// hold the write lock for their whole check-assign-append sequence. Reads
/// take the shared lock and return cloned snapshots.
#[derive(Debug, Default)]
pub struct RecordStore {
    inner: RwLock<StoreInner>,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store populated from seed data, insertion order preserved
    pub fn from_seed(seed: SeedData) -> Self {
        let store = Self::new();
        for author in seed.authors {
            store.append_author(author);
        }
        for book in seed.books {
            store.append_book(book);
        }
        store
    }

    /// Snapshot of the full book collection, in insertion order
    pub fn list_books(&self) -> Vec<Book> {
        self.inner.read().unwrap().books.clone()
    }

    /// Snapshot of the full author collection, in insertion order
    pub fn list_authors(&self) -> Vec<Author> {
        self.inner.read().unwrap().authors.clone()
    }

    /// Raw append; no validation at this layer
    pub fn append_book(&self, book: Book) {
        self.inner.write().unwrap().books.push(book);
    }

    /// Raw append; no validation at this layer
    pub fn append_author(&self, author: Author) {
        self.inner.write().unwrap().authors.push(author);
    }

    /// First book with a matching id. `None` is a soft not-found, never an
    /// error.
    pub fn find_book(&self, id: i32) -> Option<Book> {
        self.inner
            .read()
            .unwrap()
            .books
            .iter()
            .find(|book| book.id == id)
            .cloned()
    }

    /// First author with a matching id
    pub fn find_author(&self, id: i32) -> Option<Author> {
        self.inner
            .read()
            .unwrap()
            .authors
            .iter()
            .find(|author| author.id == id)
            .cloned()
    }

    /// Author referenced by a book's `authorId`. A dangling reference is
    /// tolerated and resolves to `None`.
    pub fn author_of_book(&self, book: &Book) -> Option<Author> {
        self.find_author(book.author_id)
    }

    /// All books written by an author, in collection order; empty if none
    pub fn books_of_author(&self, author: &Author) -> Vec<Book> {
        self.inner
            .read()
            .unwrap()
            .books
            .iter()
            .filter(|book| book.author_id == author.id)
            .cloned()
            .collect()
    }

    /// Create a book with the next id. The `author_id` is taken as given:
    /// no check that it refers to an existing author. Always succeeds.
    pub fn create_book(&self, name: impl Into<String>, author_id: i32) -> Book {
        let mut inner = self.inner.write().unwrap();
        let book = Book {
            id: inner.books.len() as i32 + 1,
            name: name.into(),
            author_id,
        };
        inner.books.push(book.clone());
        book
    }

    /// Create an author with the next id, unless one with the same name
    /// already exists. On a duplicate name the collection is left unmodified
    /// and a `DuplicateAuthor` error is returned. The comparison is
    /// case-sensitive.
    pub fn create_author(&self, name: impl Into<String>) -> Result<Author> {
        let name = name.into();
        let mut inner = self.inner.write().unwrap();

        if inner.authors.iter().any(|author| author.name == name) {
            return Err(ShelfqlError::DuplicateAuthor(name));
        }

        let author = Author {
            id: inner.authors.len() as i32 + 1,
            name,
        };
        inner.authors.push(author.clone());
        Ok(author)
    }

    /// Collection sizes as (authors, books), for startup logging
    pub fn counts(&self) -> (usize, usize) {
        let inner = self.inner.read().unwrap();
        (inner.authors.len(), inner.books.len())
    }
}
