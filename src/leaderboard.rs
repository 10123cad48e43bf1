use serde::Serialize;
use std::collections::HashMap;

pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredProfile {
    pub username: String,
    pub profile_url: Option<String>,
    pub total_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub username: String,
    pub score: f64,
    pub profile_url: Option<String>,
}

/// Orders profiles by total score, highest first. Ties keep input order.
///
/// A username appears once; its last snapshot replaces earlier ones.
pub fn rank(profiles: Vec<ScoredProfile>, limit: usize) -> Vec<LeaderboardEntry> {
    let mut latest = HashMap::<String, usize>::new();
    for (index, profile) in profiles.iter().enumerate() {
        latest.insert(profile.username.clone(), index);
    }
    let mut profiles = profiles
        .into_iter()
        .enumerate()
        .filter(|(index, profile)| latest.get(&profile.username) == Some(index))
        .map(|(_, profile)| profile)
        .collect::<Vec<_>>();
    profiles.sort_by(|left, right| right.total_score.total_cmp(&left.total_score));
    profiles
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(index, profile)| LeaderboardEntry {
            rank: index + 1,
            username: profile.username,
            score: profile.total_score,
            profile_url: profile.profile_url,
        })
        .collect()
}
