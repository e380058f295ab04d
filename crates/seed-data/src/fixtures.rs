//! The fixed demo records inserted by the seeder.
//!
//! Every call builds fresh records with fresh ids; the field values never change.

use octofit::{Activity, LeaderboardEntry, Team, User, Workout};

pub fn users() -> Vec<User> {
    vec![
        User::new("Superman", "superman@dc.com", "dc"),
        User::new("Batman", "batman@dc.com", "dc"),
        User::new("Wonder Woman", "wonderwoman@dc.com", "dc"),
        User::new("Iron Man", "ironman@marvel.com", "marvel"),
        User::new("Captain America", "cap@marvel.com", "marvel"),
        User::new("Black Widow", "widow@marvel.com", "marvel"),
    ]
}

pub fn teams() -> Vec<Team> {
    vec![
        Team::new("marvel", ["Iron Man", "Captain America", "Black Widow"]),
        Team::new("dc", ["Superman", "Batman", "Wonder Woman"]),
    ]
}

pub fn activities() -> Vec<Activity> {
    vec![
        Activity::new("Superman", "Flying", 120),
        Activity::new("Batman", "Martial Arts", 90),
        Activity::new("Iron Man", "Flight Suit Training", 60),
    ]
}

pub fn leaderboard() -> Vec<LeaderboardEntry> {
    vec![
        LeaderboardEntry::new("marvel", 300),
        LeaderboardEntry::new("dc", 250),
    ]
}

pub fn workouts() -> Vec<Workout> {
    vec![
        Workout::new("Strength Training", ["Superman", "Batman", "Iron Man"]),
        Workout::new("Cardio", ["Wonder Woman", "Black Widow", "Captain America"]),
    ]
}

/// All five batches, loaded together.
#[derive(Debug, Clone)]
pub struct SampleData {
    pub users: Vec<User>,
    pub teams: Vec<Team>,
    pub activities: Vec<Activity>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub workouts: Vec<Workout>,
}

impl SampleData {
    pub fn load() -> Self {
        Self {
            users: users(),
            teams: teams(),
            activities: activities(),
            leaderboard: leaderboard(),
            workouts: workouts(),
        }
    }
}
