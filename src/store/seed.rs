//! Seed data loading
//!
//! Both collections are populated once at process start from a JSON document
//! of the form `{ "authors": [...], "books": [...] }`. After seeding, the
//! store only ever grows by append.

use crate::error::{Result, ShelfqlError};
use crate::store::records::{Author, Book};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;

/// The initial contents of the record store
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SeedData {
    #[serde(default)]
    pub authors: Vec<Author>,

    #[serde(default)]
    pub books: Vec<Book>,
}

impl SeedData {
    /// Reject seed documents that would break id uniqueness, either as
    /// loaded or on the first create after loading. New ids are assigned as
    /// collection size + 1, so each collection's ids must be exactly
    /// 1..=len. Out-of-order ids are accepted as-is.
    pub fn validate(&self) -> Result<()> {
        let mut author_ids = HashSet::new();
        for author in &self.authors {
            if !author_ids.insert(author.id) {
                return Err(ShelfqlError::Seed(format!(
                    "Duplicate author id {} in seed data",
                    author.id
                )));
            }
            if author.id < 1 || author.id as usize > self.authors.len() {
                return Err(ShelfqlError::Seed(format!(
                    "Author id {} in seed data must be in 1..={}",
                    author.id,
                    self.authors.len()
                )));
            }
        }

        let mut book_ids = HashSet::new();
        for book in &self.books {
            if !book_ids.insert(book.id) {
                return Err(ShelfqlError::Seed(format!(
                    "Duplicate book id {} in seed data",
                    book.id
                )));
            }
            if book.id < 1 || book.id as usize > self.books.len() {
                return Err(ShelfqlError::Seed(format!(
                    "Book id {} in seed data must be in 1..={}",
                    book.id,
                    self.books.len()
                )));
            }
        }

        Ok(())
    }
}

/// Load seed data from a JSON file
pub fn load_seed(path: &str) -> Result<SeedData> {
    let contents = fs::read_to_string(path)
        .map_err(|e| ShelfqlError::Seed(format!("Failed to read seed file '{}': {}", path, e)))?;

    let seed: SeedData = serde_json::from_str(&contents)?;

    seed.validate()?;

    Ok(seed)
}

/// Save seed data to a JSON file
pub fn save_seed(seed: &SeedData, path: &str) -> Result<()> {
    seed.validate()?;

    let json_string = serde_json::to_string_pretty(seed)
        .map_err(|e| ShelfqlError::Serialization(format!("JSON serialization error: {}", e)))?;

    fs::write(path, json_string)
        .map_err(|e| ShelfqlError::Seed(format!("Failed to write seed file '{}': {}", path, e)))?;

    Ok(())
}
