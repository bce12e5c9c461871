use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfqlError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Seed data error: {0}")]
    Seed(String),

    #[error("Author already in database: {0}")]
    DuplicateAuthor(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for ShelfqlError {
    fn from(err: toml::de::Error) -> Self {
        ShelfqlError::Config(format!("TOML parse error: {}", err))
    }
}

impl From<toml::ser::Error> for ShelfqlError {
    fn from(err: toml::ser::Error) -> Self {
        ShelfqlError::Serialization(format!("TOML serialization error: {}", err))
    }
}

impl From<serde_json::Error> for ShelfqlError {
    fn from(err: serde_json::Error) -> Self {
        ShelfqlError::Seed(format!("JSON parse error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, ShelfqlError>;
