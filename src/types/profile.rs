//! Profile snapshot produced by the extraction layer.
//!
//! Every field defaults when absent (or `null`), so a partial snapshot always
//! deserializes and scoring degrades toward zero instead of failing.

use crate::error::{PortfolioError, Result};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeSet;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProfileData {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub public_repos: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub followers: u64,
    #[serde(default)]
    pub profile_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub repositories: Vec<RepositoryRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub commit_activity: CommitActivity,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RepositoryRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub readme_length: u64,
    #[serde(default)]
    pub readme_quality: Option<bool>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stars: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub forks: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CommitActivity {
    /// Share of active months in the observation window, 0-100.
    #[serde(default, deserialize_with = "null_as_default")]
    pub consistency_score: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_commits: u64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl RepositoryRecord {
    pub fn has_description(&self) -> bool {
        self.description
            .as_deref()
            .map(|description| !description.is_empty())
            .unwrap_or(false)
    }

    pub fn language(&self) -> Option<&str> {
        self.language
            .as_deref()
            .filter(|language| !language.is_empty())
    }
}

impl ProfileData {
    /// Parses a snapshot; `source` names it in error messages.
    pub fn from_json_str(content: &str, source: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| PortfolioError::ProfileParse(format!("{source}: {e}")))
    }

    pub fn distinct_languages(&self) -> BTreeSet<&str> {
        self.repositories
            .iter()
            .filter_map(RepositoryRecord::language)
            .collect()
    }

    /// Keeps the `max` most-starred repositories; ties keep their input order.
    pub fn retain_top_repositories(&mut self, max: usize) {
        self.repositories
            .sort_by(|left, right| right.stars.cmp(&left.stars));
        self.repositories.truncate(max);
    }
}

pub fn load_profile(path: &Path) -> Result<ProfileData> {
    if !path.exists() {
        return Err(PortfolioError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    ProfileData::from_json_str(&content, &path.display().to_string())
}
