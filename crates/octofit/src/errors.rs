use thiserror::Error;

use crate::models::Collection;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Duplicate key in {collection}: {field} = {value:?}")]
    DuplicateKey {
        collection: Collection,
        field: String,
        value: String,
    },

    #[error("Document error: {0}")]
    Document(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl StoreError {
    /// True when a uniqueness constraint rejected a write, on either backend.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            StoreError::DuplicateKey { .. } => true,
            StoreError::Database(e) => e
                .as_database_error()
                .is_some_and(|db| db.is_unique_violation()),
            _ => false,
        }
    }
}
