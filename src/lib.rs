pub mod config;
pub mod error;
pub mod schema;
pub mod server;
pub mod store;

// Re-export commonly used types
pub use config::{Config, SeedConfig, ServerConfig};
pub use error::{Result, ShelfqlError};
pub use schema::{build_schema, CatalogSchema};
pub use store::{Author, Book, RecordStore, SeedData};
