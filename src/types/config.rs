use crate::error::PortfolioError;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PortfolioConfig {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub insights: InsightsConfig,
    #[serde(default)]
    pub leaderboard: LeaderboardConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Score only the most-starred repositories when set.
    pub max_repos: Option<usize>,
    #[serde(default = "default_readme_min_length")]
    pub readme_min_length: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_repos: None,
            readme_min_length: default_readme_min_length(),
        }
    }
}

fn default_readme_min_length() -> u64 {
    500
}

#[derive(Debug, Clone, Deserialize)]
pub struct InsightsConfig {
    #[serde(default = "default_summary_repos")]
    pub summary_repos: usize,
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            summary_repos: default_summary_repos(),
        }
    }
}

fn default_summary_repos() -> usize {
    5
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeaderboardConfig {
    #[serde(default = "default_leaderboard_limit")]
    pub limit: usize,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            limit: default_leaderboard_limit(),
        }
    }
}

fn default_leaderboard_limit() -> usize {
    crate::leaderboard::DEFAULT_LIMIT
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl PortfolioConfig {
    pub fn summary_options(&self) -> crate::insights::SummaryOptions {
        crate::insights::SummaryOptions {
            summary_repos: self.insights.summary_repos,
            readme_min_length: self.analysis.readme_min_length,
        }
    }

    pub fn validate(&self) -> Result<(), PortfolioError> {
        if self.analysis.max_repos == Some(0) {
            return Err(PortfolioError::ConfigParse(
                "analysis.max_repos must be greater than 0".to_string(),
            ));
        }
        if self.insights.summary_repos == 0 {
            return Err(PortfolioError::ConfigParse(
                "insights.summary_repos must be greater than 0".to_string(),
            ));
        }
        if self.leaderboard.limit == 0 {
            return Err(PortfolioError::ConfigParse(
                "leaderboard.limit must be greater than 0".to_string(),
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err(PortfolioError::ConfigParse(
                "logging.level cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
