use crate::types::profile::ProfileData;

const CONSISTENCY_WEIGHT: f64 = 0.7;

/// Commit-volume bonus. Never below 10, even with zero commits.
pub fn commit_bonus(total_commits: u64) -> f64 {
    if total_commits > 1000 {
        40.0
    } else if total_commits > 500 {
        30.0
    } else if total_commits > 100 {
        20.0
    } else {
        10.0
    }
}

pub fn activity_score(profile: &ProfileData) -> f64 {
    let activity = &profile.commit_activity;
    let score =
        activity.consistency_score * CONSISTENCY_WEIGHT + commit_bonus(activity.total_commits);
    score.min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::profile::CommitActivity;

    fn profile(consistency_score: f64, total_commits: u64) -> ProfileData {
        ProfileData {
            commit_activity: CommitActivity {
                consistency_score,
                total_commits,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn commit_bonus_tiers() {
        assert_eq!(commit_bonus(1001), 40.0);
        assert_eq!(commit_bonus(1000), 30.0);
        assert_eq!(commit_bonus(501), 30.0);
        assert_eq!(commit_bonus(500), 20.0);
        assert_eq!(commit_bonus(101), 20.0);
        assert_eq!(commit_bonus(100), 10.0);
        assert_eq!(commit_bonus(0), 10.0);
    }

    #[test]
    fn no_activity_keeps_the_ten_point_floor() {
        assert_eq!(activity_score(&ProfileData::default()), 10.0);
    }

    #[test]
    fn consistency_is_weighted_and_result_capped() {
        assert!((activity_score(&profile(50.0, 200)) - 55.0).abs() < 1e-9);
        assert_eq!(activity_score(&profile(100.0, 5000)), 100.0);
        assert!((activity_score(&profile(100.0, 0)) - 80.0).abs() < 1e-9);
    }
}
