//! Configuration for seeding runs.

use serde::{Deserialize, Serialize};

/// Configuration for seeding operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Recreate the unique index on `users.email` after clearing.
    /// Document stores drop indexes with the collection, so this is on by default.
    pub recreate_unique_indexes: bool,

    /// Batch size for store insertions.
    pub batch_size: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            recreate_unique_indexes: true,
            batch_size: 50,
        }
    }
}
