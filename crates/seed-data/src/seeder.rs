//! Database seeding utilities.

use thiserror::Error;
use tracing::info;

use crate::config::SeedConfig;
use crate::fixtures::SampleData;
use octofit::{Activity, Collection, LeaderboardEntry, Store, StoreError, Team, User, Workout};

/// The line the `seed` command prints once a run succeeds.
pub const SUCCESS_MESSAGE: &str = "octofit_db database populated with test data";

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Record counts written by a [`Seeder::populate`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub teams: usize,
    pub activities: usize,
    pub leaderboard: usize,
    pub workouts: usize,
}

/// Resets the five collections and fills them with the demo records.
pub struct Seeder<S> {
    store: S,
    config: SeedConfig,
}

impl<S: Store> Seeder<S> {
    /// Creates a new seeder over the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            config: SeedConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SeedConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the batch size for bulk operations.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.config.batch_size = size;
        self
    }

    /// Clears every collection and inserts the fixed sample batches.
    ///
    /// Destructive: prior contents are erased unconditionally. The first store
    /// error aborts the remaining steps; completed steps are not rolled back.
    pub async fn populate(&self) -> Result<SeedSummary, SeedError> {
        let data = SampleData::load();

        self.clear_all().await?;

        if self.config.recreate_unique_indexes {
            info!("Creating unique index on users.email");
            self.store.ensure_unique_email().await?;
        }

        self.seed_users(&data.users).await?;
        self.seed_teams(&data.teams).await?;
        self.seed_activities(&data.activities).await?;
        self.seed_leaderboard(&data.leaderboard).await?;
        self.seed_workouts(&data.workouts).await?;

        info!("Seed completed!");

        Ok(SeedSummary {
            users: data.users.len(),
            teams: data.teams.len(),
            activities: data.activities.len(),
            leaderboard: data.leaderboard.len(),
            workouts: data.workouts.len(),
        })
    }

    /// Clears all seeded data.
    ///
    /// **WARNING**: This deletes every record of the five kinds. Use with caution.
    pub async fn clear_all(&self) -> Result<(), SeedError> {
        info!("Clearing all seeded data...");

        for collection in Collection::ALL {
            self.store.clear(collection).await?;
        }

        info!("All data cleared");
        Ok(())
    }

    /// Seeds users into the store.
    pub async fn seed_users(&self, users: &[User]) -> Result<(), SeedError> {
        info!("Seeding {} users...", users.len());

        for chunk in users.chunks(self.batch_size()) {
            self.store.insert_users(chunk).await?;
        }

        info!("Seeded {} users", users.len());
        Ok(())
    }

    /// Seeds teams into the store.
    pub async fn seed_teams(&self, teams: &[Team]) -> Result<(), SeedError> {
        info!("Seeding {} teams...", teams.len());

        for chunk in teams.chunks(self.batch_size()) {
            self.store.insert_teams(chunk).await?;
        }

        info!("Seeded {} teams", teams.len());
        Ok(())
    }

    /// Seeds activities into the store.
    pub async fn seed_activities(&self, activities: &[Activity]) -> Result<(), SeedError> {
        info!("Seeding {} activities...", activities.len());

        for chunk in activities.chunks(self.batch_size()) {
            self.store.insert_activities(chunk).await?;
        }

        info!("Seeded {} activities", activities.len());
        Ok(())
    }

    /// Seeds leaderboard entries into the store.
    pub async fn seed_leaderboard(&self, entries: &[LeaderboardEntry]) -> Result<(), SeedError> {
        info!("Seeding {} leaderboard entries...", entries.len());

        for chunk in entries.chunks(self.batch_size()) {
            self.store.insert_leaderboard(chunk).await?;
        }

        info!("Seeded {} leaderboard entries", entries.len());
        Ok(())
    }

    /// Seeds workouts into the store.
    pub async fn seed_workouts(&self, workouts: &[Workout]) -> Result<(), SeedError> {
        info!("Seeding {} workouts...", workouts.len());

        for chunk in workouts.chunks(self.batch_size()) {
            self.store.insert_workouts(chunk).await?;
        }

        info!("Seeded {} workouts", workouts.len());
        Ok(())
    }

    /// Returns a reference to the store for advanced usage.
    pub fn store(&self) -> &S {
        &self.store
    }

    // `chunks` panics on zero.
    fn batch_size(&self) -> usize {
        self.config.batch_size.max(1)
    }
}
