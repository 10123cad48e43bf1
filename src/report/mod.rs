pub mod json;
pub mod md;

use crate::error::PortfolioError;
use crate::leaderboard::LeaderboardEntry;
use crate::types::scoring::ScoreBreakdown;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub username: Option<String>,
    pub analyzed_at: DateTime<Utc>,
    pub scores: ScoreBreakdown,
}

impl ScoreReport {
    pub fn new(username: Option<String>, scores: ScoreBreakdown) -> Self {
        Self {
            username,
            analyzed_at: Utc::now(),
            scores,
        }
    }
}

pub fn render(report: &ScoreReport, format: OutputFormat) -> Result<String, PortfolioError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(PortfolioError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

pub fn render_leaderboard(
    entries: &[LeaderboardEntry],
    format: OutputFormat,
) -> Result<String, PortfolioError> {
    match format {
        OutputFormat::Json => json::leaderboard_to_json(entries).map_err(PortfolioError::Json),
        OutputFormat::Md => Ok(md::leaderboard_to_markdown(entries)),
    }
}
