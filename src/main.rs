mod cli;
mod config;
mod error;
mod insights;
mod leaderboard;
mod report;
mod scoring;
mod telemetry;
mod types;
mod username;

use crate::error::PortfolioError;
use crate::scoring::ScoringEngine;
use crate::types::config::PortfolioConfig;
use crate::types::profile::{load_profile, ProfileData};
use clap::Parser;
use std::path::Path;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn load_scoring_input(path: &Path, cfg: &PortfolioConfig) -> Result<ProfileData, PortfolioError> {
    let mut profile = load_profile(path)?;
    if let Some(max_repos) = cfg.analysis.max_repos {
        if profile.repositories.len() > max_repos {
            tracing::info!(
                "keeping {max_repos} of {} repositories from {}",
                profile.repositories.len(),
                path.display()
            );
        }
        profile.retain_top_repositories(max_repos);
    }
    Ok(profile)
}

fn run() -> Result<i32, PortfolioError> {
    let cli = cli::Cli::parse();
    let loaded = config::load_config(&cli.config_dir)?;
    let config_found = loaded.is_some();
    let cfg = loaded.unwrap_or_default();
    telemetry::init(&telemetry::level_for(
        cli.verbose,
        cli.quiet,
        &cfg.logging.level,
    ))?;
    tracing::info!("portfolio-score v{}", env!("CARGO_PKG_VERSION"));
    if config_found {
        tracing::debug!(
            "using {} from {}",
            config::DEFAULT_CONFIG_FILE,
            cli.config_dir.display()
        );
    } else {
        tracing::debug!(
            "no {} in {}; using defaults",
            config::DEFAULT_CONFIG_FILE,
            cli.config_dir.display()
        );
    }

    let engine = ScoringEngine::new();
    match cli.command {
        cli::Commands::Score(cmd) => {
            let profile = load_scoring_input(&cmd.profile, &cfg)?;
            let scores = engine.calculate_score(&profile);
            let score_report = report::ScoreReport::new(profile.username.clone(), scores);
            let rendered = report::render(&score_report, output_format(&cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Prompt(cmd) => {
            let profile = load_scoring_input(&cmd.profile, &cfg)?;
            let scores = engine.calculate_score(&profile);
            let summary =
                insights::InsightSummary::build(&profile, &scores, cfg.summary_options());
            println!("{}", insights::build_recruiter_prompt(&summary)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Insights(cmd) => {
            let profile = load_scoring_input(&cmd.profile, &cfg)?;
            let scores = engine.calculate_score(&profile);
            if !cmd.response.exists() {
                return Err(PortfolioError::PathNotFound(
                    cmd.response.display().to_string(),
                ));
            }
            let response_text = std::fs::read_to_string(&cmd.response)?;
            let parsed = insights::parse_insights(&response_text);
            let degraded = parsed.is_none();
            let ai_insights = parsed.unwrap_or_else(insights::AiInsights::fallback);

            let analysis = serde_json::json!({
                "username": profile.username,
                "scores": scores,
                "ai_insights": ai_insights,
            });
            println!("{}", serde_json::to_string_pretty(&analysis)?);

            if degraded {
                eprintln!(
                    "warning: could not parse insights from {}; using defaults",
                    cmd.response.display()
                );
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Rank(cmd) => {
            let mut scored = Vec::with_capacity(cmd.profiles.len());
            for path in &cmd.profiles {
                let profile = load_scoring_input(path, &cfg)?;
                let scores = engine.calculate_score(&profile);
                let username = profile.username.clone().unwrap_or_else(|| {
                    path.file_stem()
                        .map(|stem| stem.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string())
                });
                scored.push(leaderboard::ScoredProfile {
                    username,
                    profile_url: profile.profile_url.clone(),
                    total_score: scores.total_score,
                });
            }
            let limit = cmd.limit.unwrap_or(cfg.leaderboard.limit);
            let entries = leaderboard::rank(scored, limit);
            println!(
                "{}",
                report::render_leaderboard(&entries, output_format(&cmd.format))?
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Username(cmd) => {
            println!("{}", username::extract_username(&cmd.input)?);
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
