use crate::types::profile::{ProfileData, RepositoryRecord};

const DESCRIPTION_BONUS: u32 = 10;

fn readme_tier(readme_length: u64) -> u32 {
    if readme_length > 1000 {
        100
    } else if readme_length > 500 {
        75
    } else if readme_length > 100 {
        50
    } else {
        25
    }
}

fn repository_score(repo: &RepositoryRecord) -> u32 {
    let mut score = readme_tier(repo.readme_length);
    if repo.has_description() {
        score += DESCRIPTION_BONUS;
    }
    score.min(100)
}

/// Mean per-repository README score, 0 when there are no repositories.
pub fn documentation_score(profile: &ProfileData) -> f64 {
    if profile.repositories.is_empty() {
        return 0.0;
    }
    let total: u64 = profile
        .repositories
        .iter()
        .map(|repo| u64::from(repository_score(repo)))
        .sum();
    total as f64 / profile.repositories.len() as f64
}
