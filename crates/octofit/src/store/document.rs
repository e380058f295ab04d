use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use super::Store;
use crate::errors::StoreError;
use crate::models::{Activity, Collection, LeaderboardEntry, Team, User, Workout};

#[derive(Debug, Default)]
struct DocumentCollection {
    documents: Vec<Value>,
    /// Top-level fields whose values must be unique across `documents`.
    unique_fields: Vec<String>,
}

impl DocumentCollection {
    fn insert(&mut self, collection: Collection, document: Value) -> Result<(), StoreError> {
        for field in &self.unique_fields {
            let Some(value) = document.get(field) else {
                continue;
            };
            if self.documents.iter().any(|d| d.get(field) == Some(value)) {
                return Err(StoreError::DuplicateKey {
                    collection,
                    field: field.clone(),
                    value: display_value(value),
                });
            }
        }
        self.documents.push(document);
        Ok(())
    }

    fn create_unique_index(
        &mut self,
        collection: Collection,
        field: &str,
    ) -> Result<(), StoreError> {
        if self.unique_fields.iter().any(|f| f == field) {
            return Ok(());
        }

        let mut seen = Vec::with_capacity(self.documents.len());
        for value in self.documents.iter().filter_map(|d| d.get(field)) {
            if seen.contains(&value) {
                return Err(StoreError::DuplicateKey {
                    collection,
                    field: field.to_string(),
                    value: display_value(value),
                });
            }
            seen.push(value);
        }

        self.unique_fields.push(field.to_string());
        Ok(())
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// In-process document backend.
///
/// Each collection holds JSON documents serialized from the models. Clearing a
/// collection drops it along with its unique indexes, so uniqueness has to be
/// re-established with [`Store::ensure_unique_email`] afterwards.
#[derive(Debug, Default)]
pub struct DocumentStore {
    collections: RwLock<HashMap<Collection, DocumentCollection>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn insert_many<T: Serialize>(
        &self,
        collection: Collection,
        records: &[T],
    ) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        let target = collections.entry(collection).or_default();

        for record in records {
            target.insert(collection, serde_json::to_value(record)?)?;
        }

        debug!("Inserted {} documents into {}", records.len(), collection);
        Ok(())
    }

    async fn find<T, F>(&self, collection: Collection, predicate: F) -> Result<Vec<T>, StoreError>
    where
        T: DeserializeOwned,
        F: Fn(&Value) -> bool,
    {
        let collections = self.collections.read().await;
        let Some(source) = collections.get(&collection) else {
            return Ok(Vec::new());
        };

        source
            .documents
            .iter()
            .filter(|d| predicate(*d))
            .map(|d| serde_json::from_value(d.clone()).map_err(StoreError::from))
            .collect()
    }

    async fn find_all<T: DeserializeOwned>(
        &self,
        collection: Collection,
    ) -> Result<Vec<T>, StoreError> {
        self.find(collection, |_| true).await
    }
}

#[async_trait]
impl Store for DocumentStore {
    async fn clear(&self, collection: Collection) -> Result<(), StoreError> {
        self.collections.write().await.remove(&collection);
        Ok(())
    }

    async fn ensure_unique_email(&self) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        collections
            .entry(Collection::Users)
            .or_default()
            .create_unique_index(Collection::Users, "email")
    }

    async fn insert_users(&self, users: &[User]) -> Result<(), StoreError> {
        self.insert_many(Collection::Users, users).await
    }

    async fn insert_teams(&self, teams: &[Team]) -> Result<(), StoreError> {
        self.insert_many(Collection::Teams, teams).await
    }

    async fn insert_activities(&self, activities: &[Activity]) -> Result<(), StoreError> {
        self.insert_many(Collection::Activities, activities).await
    }

    async fn insert_leaderboard(&self, entries: &[LeaderboardEntry]) -> Result<(), StoreError> {
        self.insert_many(Collection::Leaderboard, entries).await
    }

    async fn insert_workouts(&self, workouts: &[Workout]) -> Result<(), StoreError> {
        self.insert_many(Collection::Workouts, workouts).await
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        self.find_all(Collection::Users).await
    }

    async fn list_teams(&self) -> Result<Vec<Team>, StoreError> {
        self.find_all(Collection::Teams).await
    }

    async fn list_activities(&self) -> Result<Vec<Activity>, StoreError> {
        self.find_all(Collection::Activities).await
    }

    async fn list_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, StoreError> {
        self.find_all(Collection::Leaderboard).await
    }

    async fn list_workouts(&self) -> Result<Vec<Workout>, StoreError> {
        self.find_all(Collection::Workouts).await
    }

    async fn users_by_team(&self, team: &str) -> Result<Vec<User>, StoreError> {
        self.find(Collection::Users, |d| d.get("team").and_then(Value::as_str) == Some(team))
            .await
    }

    async fn count(&self, collection: Collection) -> Result<u64, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .map_or(0, |c| c.documents.len() as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_user() {
        let store = DocumentStore::new();
        let user = User::new("Test", "test@example.com", "marvel");
        store.insert_users(std::slice::from_ref(&user)).await.unwrap();

        let users = store.list_users().await.unwrap();
        assert_eq!(users, vec![user]);
        assert_eq!(users[0].name, "Test");
    }

    #[tokio::test]
    async fn test_create_team() {
        let store = DocumentStore::new();
        let team = Team::new("marvel", ["Test"]);
        store.insert_teams(std::slice::from_ref(&team)).await.unwrap();

        let teams = store.list_teams().await.unwrap();
        assert_eq!(teams, vec![team]);
        assert_eq!(teams[0].members, ["Test"]);
    }

    #[tokio::test]
    async fn test_create_activity() {
        let store = DocumentStore::new();
        let activity = Activity::new("Test", "Running", 30);
        store
            .insert_activities(std::slice::from_ref(&activity))
            .await
            .unwrap();

        let activities = store.list_activities().await.unwrap();
        assert_eq!(activities, vec![activity]);
        assert_eq!(activities[0].activity, "Running");
    }

    #[tokio::test]
    async fn test_create_leaderboard_entry() {
        let store = DocumentStore::new();
        let entry = LeaderboardEntry::new("marvel", 100);
        store
            .insert_leaderboard(std::slice::from_ref(&entry))
            .await
            .unwrap();

        let entries = store.list_leaderboard().await.unwrap();
        assert_eq!(entries, vec![entry]);
        assert_eq!(entries[0].points, 100);
    }

    #[tokio::test]
    async fn test_create_workout() {
        let store = DocumentStore::new();
        let workout = Workout::new("Yoga", ["Test"]);
        store
            .insert_workouts(std::slice::from_ref(&workout))
            .await
            .unwrap();

        let workouts = store.list_workouts().await.unwrap();
        assert_eq!(workouts, vec![workout]);
        assert_eq!(workouts[0].name, "Yoga");
    }

    #[tokio::test]
    async fn test_unique_email_rejects_duplicate() {
        let store = DocumentStore::new();
        store.ensure_unique_email().await.unwrap();

        let first = User::new("A", "same@example.com", "dc");
        let second = User::new("B", "same@example.com", "marvel");
        let third = User::new("C", "other@example.com", "marvel");

        let err = store
            .insert_users(&[first, second, third])
            .await
            .unwrap_err();
        assert!(err.is_unique_violation());
        assert!(matches!(
            err,
            StoreError::DuplicateKey { collection: Collection::Users, ref field, ref value }
                if field == "email" && value == "same@example.com"
        ));

        // Ordered insert: the record before the failure stays, the one after never lands.
        let names: Vec<String> = store
            .list_users()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(names, ["A"]);
    }

    #[tokio::test]
    async fn test_clear_drops_unique_index() {
        let store = DocumentStore::new();
        store.ensure_unique_email().await.unwrap();
        store.clear(Collection::Users).await.unwrap();

        store
            .insert_users(&[
                User::new("A", "same@example.com", "dc"),
                User::new("B", "same@example.com", "dc"),
            ])
            .await
            .unwrap();
        assert_eq!(store.count(Collection::Users).await.unwrap(), 2);

        let err = store.ensure_unique_email().await.unwrap_err();
        assert!(err.is_unique_violation());
    }

    #[tokio::test]
    async fn test_users_by_team() {
        let store = DocumentStore::new();
        store
            .insert_users(&[
                User::new("Superman", "superman@dc.com", "dc"),
                User::new("Iron Man", "ironman@marvel.com", "marvel"),
                User::new("Batman", "batman@dc.com", "dc"),
            ])
            .await
            .unwrap();

        let names: Vec<String> = store
            .users_by_team("dc")
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(names, ["Superman", "Batman"]);
        assert!(store.users_by_team("x-men").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_count_missing_collection_is_zero() {
        let store = DocumentStore::new();
        assert_eq!(store.count(Collection::Workouts).await.unwrap(), 0);
        assert!(store.list_workouts().await.unwrap().is_empty());
    }
}
