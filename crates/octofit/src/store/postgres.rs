use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::{debug, info};

use super::Store;
use crate::config::StoreConfig;
use crate::errors::StoreError;
use crate::models::{Activity, Collection, LeaderboardEntry, Team, User, Workout};

/// Relational backend: one PostgreSQL table per collection.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool with the configured settings.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect(&config.database_url)
            .await?;

        info!("Connected to database");
        Ok(Self::new(pool))
    }

    /// Applies the embedded schema migrations.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        debug!("Migrations applied");
        Ok(())
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Store for PgStore {
    async fn clear(&self, collection: Collection) -> Result<(), StoreError> {
        let sql = format!("DELETE FROM {}", collection.as_str());
        sqlx::query(&sql).execute(&self.pool).await?;
        Ok(())
    }

    async fn ensure_unique_email(&self) -> Result<(), StoreError> {
        sqlx::query("DROP INDEX IF EXISTS users_email_key")
            .execute(&self.pool)
            .await?;
        sqlx::query("CREATE UNIQUE INDEX users_email_key ON users (email)")
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn insert_users(&self, users: &[User]) -> Result<(), StoreError> {
        for user in users {
            sqlx::query(
                r#"
                INSERT INTO users (id, name, email, team)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(user.id)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.team)
            .execute(&self.pool)
            .await?;
        }
        Ok(())
    }

    async fn insert_teams(&self, teams: &[Team]) -> Result<(), StoreError> {
        for team in teams {
            sqlx::query(
                r#"
                INSERT INTO teams (id, name, members)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(team.id)
            .bind(&team.name)
            .bind(&team.members)
            .execute(&self.pool)
            .await?;
        }
        Ok(())
    }

    async fn insert_activities(&self, activities: &[Activity]) -> Result<(), StoreError> {
        for activity in activities {
            sqlx::query(
                r#"
                INSERT INTO activities (id, user_name, activity, duration)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(activity.id)
            .bind(&activity.user)
            .bind(&activity.activity)
            .bind(activity.duration)
            .execute(&self.pool)
            .await?;
        }
        Ok(())
    }

    async fn insert_leaderboard(&self, entries: &[LeaderboardEntry]) -> Result<(), StoreError> {
        for entry in entries {
            sqlx::query(
                r#"
                INSERT INTO leaderboard (id, team, points)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(entry.id)
            .bind(&entry.team)
            .bind(entry.points)
            .execute(&self.pool)
            .await?;
        }
        Ok(())
    }

    async fn insert_workouts(&self, workouts: &[Workout]) -> Result<(), StoreError> {
        for workout in workouts {
            sqlx::query(
                r#"
                INSERT INTO workouts (id, name, suggested_for)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(workout.id)
            .bind(&workout.name)
            .bind(&workout.suggested_for)
            .execute(&self.pool)
            .await?;
        }
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as("SELECT id, name, email, team FROM users ORDER BY seq")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn list_teams(&self) -> Result<Vec<Team>, StoreError> {
        let teams = sqlx::query_as("SELECT id, name, members FROM teams ORDER BY seq")
            .fetch_all(&self.pool)
            .await?;
        Ok(teams)
    }

    async fn list_activities(&self) -> Result<Vec<Activity>, StoreError> {
        let activities = sqlx::query_as(
            "SELECT id, user_name, activity, duration FROM activities ORDER BY seq",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(activities)
    }

    async fn list_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, StoreError> {
        let entries = sqlx::query_as("SELECT id, team, points FROM leaderboard ORDER BY seq")
            .fetch_all(&self.pool)
            .await?;
        Ok(entries)
    }

    async fn list_workouts(&self) -> Result<Vec<Workout>, StoreError> {
        let workouts =
            sqlx::query_as("SELECT id, name, suggested_for FROM workouts ORDER BY seq")
                .fetch_all(&self.pool)
                .await?;
        Ok(workouts)
    }

    async fn users_by_team(&self, team: &str) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as(
            r#"
            SELECT id, name, email, team
            FROM users
            WHERE team = $1
            ORDER BY seq
            "#,
        )
        .bind(team)
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    async fn count(&self, collection: Collection) -> Result<u64, StoreError> {
        let sql = format!("SELECT COUNT(*) FROM {}", collection.as_str());
        let count: i64 = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;
        Ok(count as u64)
    }
}
