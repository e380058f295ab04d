//! OctoFit data model and stores.
//!
//! Five flat record kinds (users, teams, activities, leaderboard entries and
//! workouts) and two interchangeable backends behind the [`store::Store`]
//! trait: PostgreSQL via `sqlx`, and an in-process document store.

pub mod config;
pub mod errors;
pub mod models;
pub mod store;

pub use config::StoreConfig;
pub use errors::StoreError;
pub use models::{Activity, Collection, LeaderboardEntry, Team, User, Workout};
pub use store::{DocumentStore, PgStore, Store};
