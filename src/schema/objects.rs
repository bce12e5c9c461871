use async_graphql::{Context, Object};
use std::sync::Arc;

use crate::store::{self, RecordStore};

/// GraphQL view over a book record. Every field is bound explicitly to the
/// record property or store operation that produces it.
pub struct Book(pub store::Book);

/// This represents a book written by an author
#[Object]
impl Book {
    async fn id(&self) -> i32 {
        self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn author_id(&self) -> i32 {
        self.0.author_id
    }

    /// The author of this book; null if the authorId dangles
    async fn author(&self, ctx: &Context<'_>) -> Option<Author> {
        let store = ctx.data_unchecked::<Arc<RecordStore>>();
        store.author_of_book(&self.0).map(Author)
    }
}

/// GraphQL view over an author record
pub struct Author(pub store::Author);

/// This represents the author of a book
#[Object]
impl Author {
    async fn id(&self) -> i32 {
        self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    /// All books written by this author
    async fn books(&self, ctx: &Context<'_>) -> Vec<Book> {
        let store = ctx.data_unchecked::<Arc<RecordStore>>();
        store.books_of_author(&self.0).into_iter().map(Book).collect()
    }
}
