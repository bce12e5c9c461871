//! GraphQL schema
//!
//! Static schema binding the book and author object types, the root query
//! and the root mutation to record-store operations. The shared store is
//! installed as schema data so every resolver reaches it through the
//! request context.

mod mutation;
mod objects;
mod query;

pub use mutation::MutationRoot;
pub use objects::{Author, Book};
pub use query::QueryRoot;

use crate::store::RecordStore;
use async_graphql::{EmptySubscription, Schema};
use std::sync::Arc;

pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the GraphQL schema over a record store
pub fn build_schema(store: Arc<RecordStore>) -> CatalogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}
