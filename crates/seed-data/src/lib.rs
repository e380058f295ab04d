//! Sample data seeding for octofit.
//!
//! The [`Seeder`] wipes the users, teams, activities, leaderboard and workouts
//! collections of any [`octofit::Store`] and inserts the fixed demo records
//! from [`fixtures`].
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let store = PgStore::connect(&StoreConfig::from_env()?).await?;
//! store.migrate().await?;
//! let summary = Seeder::new(store).populate().await?;
//! ```

pub mod config;
pub mod fixtures;
mod seeder;

pub use seeder::{SUCCESS_MESSAGE, SeedError, SeedSummary, Seeder};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::SeedConfig;
    pub use crate::fixtures::SampleData;
    pub use crate::{SeedError, SeedSummary, Seeder};
    pub use octofit::{DocumentStore, PgStore, Store, StoreConfig};
}
