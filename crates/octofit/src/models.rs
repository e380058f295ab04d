use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The five record kinds, in seeding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Teams,
    Activities,
    Leaderboard,
    Workouts,
}

impl Collection {
    pub const ALL: [Collection; 5] = [
        Collection::Users,
        Collection::Teams,
        Collection::Activities,
        Collection::Leaderboard,
        Collection::Workouts,
    ];

    /// Returns the collection (or table) name used by the stores.
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Teams => "teams",
            Collection::Activities => "activities",
            Collection::Leaderboard => "leaderboard",
            Collection::Workouts => "workouts",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub team: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            team: team.into(),
        }
    }
}

/// A team and the names of its members. Member names are free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub members: Vec<String>,
}

impl Team {
    pub fn new<I, S>(name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }
}

/// A logged activity. `duration` is in minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Activity {
    pub id: Uuid,
    #[sqlx(rename = "user_name")]
    pub user: String,
    pub activity: String,
    pub duration: i32,
}

impl Activity {
    pub fn new(user: impl Into<String>, activity: impl Into<String>, duration: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            user: user.into(),
            activity: activity.into(),
            duration,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct LeaderboardEntry {
    pub id: Uuid,
    pub team: String,
    pub points: i32,
}

impl LeaderboardEntry {
    pub fn new(team: impl Into<String>, points: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            team: team.into(),
            points,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Workout {
    pub id: Uuid,
    pub name: String,
    pub suggested_for: Vec<String>,
}

impl Workout {
    pub fn new<I, S>(name: impl Into<String>, suggested_for: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            suggested_for: suggested_for.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_names() {
        let names: Vec<&str> = Collection::ALL.iter().map(Collection::as_str).collect();
        assert_eq!(
            names,
            ["users", "teams", "activities", "leaderboard", "workouts"]
        );
        assert_eq!(Collection::Leaderboard.to_string(), "leaderboard");
    }

    #[test]
    fn test_new_assigns_distinct_ids() {
        let a = User::new("Test", "a@example.com", "marvel");
        let b = User::new("Test", "b@example.com", "marvel");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_team_keeps_member_order() {
        let team = Team::new("dc", ["Superman", "Batman", "Wonder Woman"]);
        assert_eq!(team.members, ["Superman", "Batman", "Wonder Woman"]);
    }

    #[test]
    fn test_activity_serializes_user_field() {
        let activity = Activity::new("Test", "Running", 30);
        let doc = serde_json::to_value(&activity).unwrap();
        assert_eq!(doc["user"], "Test");
        assert_eq!(doc["duration"], 30);
    }
}
