//! Populate the octofit_db database with test data.
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin seed
//! ```
//!
//! Erases users, teams, activities, leaderboard and workouts before inserting.
//!
//! This command always seeds PostgreSQL (`DATABASE_URL`). The document-store
//! flavor (drop each collection, recreate the unique email index, insert) is
//! `octofit::DocumentStore`, which lives in-process and is only reachable by
//! driving `seed_data::Seeder` from library code or tests.

use octofit::{PgStore, StoreConfig};
use seed_data::{SUCCESS_MESSAGE, Seeder};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = StoreConfig::from_env()?;
    let store = PgStore::connect(&config).await?;
    store.migrate().await?;

    let summary = Seeder::new(store).populate().await?;

    tracing::info!("  Users: {}", summary.users);
    tracing::info!("  Teams: {}", summary.teams);
    tracing::info!("  Activities: {}", summary.activities);
    tracing::info!("  Leaderboard: {}", summary.leaderboard);
    tracing::info!("  Workouts: {}", summary.workouts);

    println!("{SUCCESS_MESSAGE}");

    Ok(())
}
