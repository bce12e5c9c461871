use serde::{Deserialize, Serialize};

/// A book record as held by the store and the seed file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Book {
    pub id: i32,
    pub name: String,
    /// Id of the author who wrote this book. Not checked against the Author
    /// collection: a dangling reference resolves to "no author found".
    #[serde(rename = "authorId")]
    pub author_id: i32,
}

/// An author record
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Author {
    pub id: i32,
    pub name: String,
}
