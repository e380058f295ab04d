//! Storage backends for the five OctoFit collections.
//!
//! [`Store`] is the seam the seeder and the model tests are written against.
//! [`PgStore`] keeps the records in PostgreSQL tables; [`DocumentStore`] keeps
//! them as JSON documents in named in-process collections with unique indexes.

mod document;
mod postgres;

pub use document::DocumentStore;
pub use postgres::PgStore;

use async_trait::async_trait;

use crate::errors::StoreError;
use crate::models::{Activity, Collection, LeaderboardEntry, Team, User, Workout};

/// Data-access operations shared by every backend.
///
/// Inserts are ordered: the first record that fails stops the batch and
/// records before it stay written. Lists return records in insertion order.
#[async_trait]
pub trait Store: Send + Sync {
    /// Deletes every record of one kind.
    async fn clear(&self, collection: Collection) -> Result<(), StoreError>;

    /// (Re)creates the uniqueness constraint on `users.email`.
    async fn ensure_unique_email(&self) -> Result<(), StoreError>;

    async fn insert_users(&self, users: &[User]) -> Result<(), StoreError>;
    async fn insert_teams(&self, teams: &[Team]) -> Result<(), StoreError>;
    async fn insert_activities(&self, activities: &[Activity]) -> Result<(), StoreError>;
    async fn insert_leaderboard(&self, entries: &[LeaderboardEntry]) -> Result<(), StoreError>;
    async fn insert_workouts(&self, workouts: &[Workout]) -> Result<(), StoreError>;

    async fn list_users(&self) -> Result<Vec<User>, StoreError>;
    async fn list_teams(&self) -> Result<Vec<Team>, StoreError>;
    async fn list_activities(&self) -> Result<Vec<Activity>, StoreError>;
    async fn list_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, StoreError>;
    async fn list_workouts(&self) -> Result<Vec<Workout>, StoreError>;

    /// Users whose `team` field equals `team`.
    async fn users_by_team(&self, team: &str) -> Result<Vec<User>, StoreError>;

    /// Number of records of one kind.
    async fn count(&self, collection: Collection) -> Result<u64, StoreError>;
}
