//! Helpers shared by the seeder integration tests.

use octofit::Store;

/// Field values of every record, without storage ids.
#[derive(Debug, PartialEq)]
pub struct Snapshot {
    pub users: Vec<(String, String, String)>,
    pub teams: Vec<(String, Vec<String>)>,
    pub activities: Vec<(String, String, i32)>,
    pub leaderboard: Vec<(String, i32)>,
    pub workouts: Vec<(String, Vec<String>)>,
}

pub async fn snapshot(store: &impl Store) -> Snapshot {
    Snapshot {
        users: store
            .list_users()
            .await
            .unwrap()
            .into_iter()
            .map(|u| (u.name, u.email, u.team))
            .collect(),
        teams: store
            .list_teams()
            .await
            .unwrap()
            .into_iter()
            .map(|t| (t.name, t.members))
            .collect(),
        activities: store
            .list_activities()
            .await
            .unwrap()
            .into_iter()
            .map(|a| (a.user, a.activity, a.duration))
            .collect(),
        leaderboard: store
            .list_leaderboard()
            .await
            .unwrap()
            .into_iter()
            .map(|e| (e.team, e.points))
            .collect(),
        workouts: store
            .list_workouts()
            .await
            .unwrap()
            .into_iter()
            .map(|w| (w.name, w.suggested_for))
            .collect(),
    }
}
