use crate::types::profile::{ProfileData, RepositoryRecord};

const LANGUAGE_WEIGHT: f64 = 0.4;
const COMPLEXITY_WEIGHT: f64 = 0.6;

/// 20 points per distinct language, capped at 100 (five languages).
pub fn language_score(profile: &ProfileData) -> u64 {
    (profile.distinct_languages().len() as u64 * 20).min(100)
}

fn star_points(stars: u64) -> u64 {
    if stars > 1000 {
        30
    } else if stars > 100 {
        20
    } else if stars > 10 {
        10
    } else {
        5
    }
}

fn fork_points(forks: u64) -> u64 {
    if forks > 100 {
        20
    } else if forks > 10 {
        10
    } else {
        0
    }
}

fn repository_points(repo: &RepositoryRecord) -> u64 {
    star_points(repo.stars) + fork_points(repo.forks)
}

/// Star and fork points averaged with floor division, capped at 100.
pub fn complexity_score(profile: &ProfileData) -> u64 {
    let total: u64 = profile.repositories.iter().map(repository_points).sum();
    let divisor = profile.repositories.len().max(1) as u64;
    (total / divisor).min(100)
}

pub fn technical_depth_score(profile: &ProfileData) -> f64 {
    language_score(profile) as f64 * LANGUAGE_WEIGHT
        + complexity_score(profile) as f64 * COMPLEXITY_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(language: Option<&str>, stars: u64, forks: u64) -> RepositoryRecord {
        RepositoryRecord {
            language: language.map(str::to_string),
            stars,
            forks,
            ..Default::default()
        }
    }

    fn profile(repositories: Vec<RepositoryRecord>) -> ProfileData {
        ProfileData {
            repositories,
            ..Default::default()
        }
    }

    #[test]
    fn star_and_fork_tiers() {
        assert_eq!(star_points(1001), 30);
        assert_eq!(star_points(1000), 20);
        assert_eq!(star_points(101), 20);
        assert_eq!(star_points(100), 10);
        assert_eq!(star_points(11), 10);
        assert_eq!(star_points(10), 5);
        assert_eq!(star_points(0), 5);
        assert_eq!(fork_points(101), 20);
        assert_eq!(fork_points(100), 10);
        assert_eq!(fork_points(11), 10);
        assert_eq!(fork_points(10), 0);
    }

    #[test]
    fn language_score_caps_at_five_languages() {
        let five = ["Rust", "Go", "Python", "C", "Zig"]
            .into_iter()
            .map(|language| repo(Some(language), 0, 0))
            .collect::<Vec<_>>();
        assert_eq!(language_score(&profile(five.clone())), 100);

        let mut six = five;
        six.push(repo(Some("Haskell"), 0, 0));
        assert_eq!(language_score(&profile(six)), 100);

        let four = vec![
            repo(Some("Rust"), 0, 0),
            repo(Some("Go"), 0, 0),
            repo(Some("C"), 0, 0),
            repo(Some("Zig"), 0, 0),
            repo(None, 0, 0),
        ];
        assert_eq!(language_score(&profile(four)), 80);
    }

    #[test]
    fn complexity_uses_floor_division() {
        // (30 + 20) + (5 + 0) + (10 + 0) = 65, 65 / 3 = 21 with floor division
        let repos = vec![repo(None, 5000, 500), repo(None, 0, 0), repo(None, 50, 0)];
        assert_eq!(complexity_score(&profile(repos)), 21);
    }

    #[test]
    fn complexity_is_zero_without_repositories() {
        assert_eq!(complexity_score(&ProfileData::default()), 0);
        assert_eq!(technical_depth_score(&ProfileData::default()), 0.0);
    }

    #[test]
    fn single_popular_repository() {
        let repos = vec![repo(Some("Go"), 5000, 50)];
        assert_eq!(language_score(&profile(repos.clone())), 20);
        assert_eq!(complexity_score(&profile(repos.clone())), 40);
        assert!((technical_depth_score(&profile(repos)) - 32.0).abs() < 1e-9);
    }
}
