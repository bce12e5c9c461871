use async_graphql::{Context, Object};
use std::sync::Arc;

use crate::schema::objects::{Author, Book};
use crate::store::RecordStore;

pub struct QueryRoot;

/// Root query
#[Object]
impl QueryRoot {
    /// List of all books
    async fn books(&self, ctx: &Context<'_>) -> Vec<Book> {
        let store = ctx.data_unchecked::<Arc<RecordStore>>();
        store.list_books().into_iter().map(Book).collect()
    }

    /// List of all authors
    async fn authors(&self, ctx: &Context<'_>) -> Vec<Author> {
        let store = ctx.data_unchecked::<Arc<RecordStore>>();
        store.list_authors().into_iter().map(Author).collect()
    }

    /// A single book; null when no book has the given id
    async fn book(&self, ctx: &Context<'_>, id: i32) -> Option<Book> {
        let store = ctx.data_unchecked::<Arc<RecordStore>>();
        store.find_book(id).map(Book)
    }

    /// A single author; null when no author has the given id
    async fn author(&self, ctx: &Context<'_>, id: i32) -> Option<Author> {
        let store = ctx.data_unchecked::<Arc<RecordStore>>();
        store.find_author(id).map(Author)
    }
}
