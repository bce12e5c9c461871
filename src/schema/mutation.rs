use async_graphql::{Context, Object};
use std::sync::Arc;

use crate::schema::objects::{Author, Book};
use crate::store::RecordStore;

pub struct MutationRoot;

/// Root mutation
#[Object]
impl MutationRoot {
    /// Add a book. The authorId is accepted as given, even if no author
    /// with that id exists.
    async fn add_book(&self, ctx: &Context<'_>, name: String, author_id: i32) -> Book {
        let store = ctx.data_unchecked::<Arc<RecordStore>>();
        Book(store.create_book(name, author_id))
    }

    /// Add an author. Fails if an author with the same name already exists,
    /// leaving the collection unchanged.
    async fn add_author(&self, ctx: &Context<'_>, name: String) -> async_graphql::Result<Author> {
        let store = ctx.data_unchecked::<Arc<RecordStore>>();
        store
            .create_author(name)
            .map(Author)
            .map_err(|e| async_graphql::Error::new(e.to_string()))
    }
}
