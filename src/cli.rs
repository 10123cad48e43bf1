use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "portfolio-score",
    version,
    about = "Developer portfolio scoring CLI for hiring review"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding portfolio.toml
    #[arg(long, global = true, default_value = ".")]
    pub config_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a profile snapshot
    Score(ScoreCommand),
    /// Print the recruiter prompt for a profile snapshot
    Prompt(PromptCommand),
    /// Parse a model reply into structured insights
    Insights(InsightsCommand),
    /// Rank several profile snapshots by total score
    Rank(RankCommand),
    /// Normalize a username or profile URL
    Username(UsernameCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    pub profile: PathBuf,
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct PromptCommand {
    pub profile: PathBuf,
}

#[derive(Args)]
pub struct InsightsCommand {
    pub profile: PathBuf,
    #[arg(long)]
    pub response: PathBuf,
}

#[derive(Args)]
pub struct RankCommand {
    #[arg(required = true)]
    pub profiles: Vec<PathBuf>,
    #[arg(long)]
    pub limit: Option<usize>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct UsernameCommand {
    pub input: String,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
