//! Deterministic half of the recruiter insight generator.
//!
//! Builds the prompt a language model is asked to answer and parses its
//! reply. Unparsable replies degrade to [`AiInsights::fallback`].

pub mod prompt;

use crate::types::profile::{ProfileData, RepositoryRecord};
use crate::types::scoring::ScoreBreakdown;
use serde::{Deserialize, Serialize};

pub use prompt::build_recruiter_prompt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryOptions {
    pub summary_repos: usize,
    pub readme_min_length: u64,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            summary_repos: 5,
            readme_min_length: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepositorySummary {
    pub name: Option<String>,
    pub language: Option<String>,
    pub stars: u64,
    pub description: Option<String>,
    pub readme_quality: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightSummary {
    pub username: Option<String>,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub followers: u64,
    pub public_repos: u64,
    pub total_score: f64,
    pub repositories: Vec<RepositorySummary>,
    pub commit_activity: u64,
    pub languages: Vec<String>,
}

impl InsightSummary {
    pub fn build(profile: &ProfileData, scores: &ScoreBreakdown, options: SummaryOptions) -> Self {
        let repositories = profile
            .repositories
            .iter()
            .take(options.summary_repos)
            .map(|repo| summarize_repository(repo, options.readme_min_length))
            .collect();

        Self {
            username: profile.username.clone(),
            name: profile.name.clone(),
            bio: profile.bio.clone(),
            followers: profile.followers,
            public_repos: profile.public_repos,
            total_score: scores.total_score,
            repositories,
            commit_activity: profile.commit_activity.total_commits,
            languages: profile
                .distinct_languages()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

fn summarize_repository(repo: &RepositoryRecord, readme_min_length: u64) -> RepositorySummary {
    RepositorySummary {
        name: repo.name.clone(),
        language: repo.language.clone(),
        stars: repo.stars,
        description: repo.description.clone(),
        readme_quality: repo
            .readme_quality
            .unwrap_or(repo.readme_length > readme_min_length),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrongSignal {
    pub signal: String,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedFlag {
    pub flag: String,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImprovementAction {
    pub action: String,
    /// high, medium or low
    pub impact: String,
    #[serde(default)]
    pub explanation: String,
}

/// Model reply. Sections the model leaves out are empty, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AiInsights {
    #[serde(default)]
    pub developer_profile: String,
    #[serde(default)]
    pub strong_signals: Vec<StrongSignal>,
    #[serde(default)]
    pub red_flags: Vec<RedFlag>,
    #[serde(default)]
    pub improvement_actions: Vec<ImprovementAction>,
    #[serde(default)]
    pub overall_assessment: String,
}

impl AiInsights {
    pub fn fallback() -> Self {
        Self {
            developer_profile: "Unable to generate".to_string(),
            strong_signals: vec![StrongSignal {
                signal: "Data unavailable".to_string(),
                explanation: String::new(),
            }],
            red_flags: vec![RedFlag {
                flag: "Analysis error".to_string(),
                explanation: String::new(),
            }],
            improvement_actions: vec![ImprovementAction {
                action: "Retry analysis".to_string(),
                impact: "high".to_string(),
                explanation: String::new(),
            }],
            overall_assessment: "Please try again later.".to_string(),
        }
    }
}

/// Extracts the outermost JSON object from a model reply.
pub fn parse_insights(response_text: &str) -> Option<AiInsights> {
    let start = response_text.find('{')?;
    let end = response_text.rfind('}')?;
    if end <= start {
        return None;
    }
    match serde_json::from_str(&response_text[start..=end]) {
        Ok(insights) => Some(insights),
        Err(e) => {
            tracing::warn!("discarding unparsable insight response: {e}");
            None
        }
    }
}
