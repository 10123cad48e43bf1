use crate::error::{PortfolioError, Result};
use tracing_subscriber::EnvFilter;

/// Picks the filter directive from CLI flags, falling back to the configured level.
pub fn level_for(verbose: u8, quiet: bool, configured: &str) -> String {
    if quiet {
        return "error".to_string();
    }
    match verbose {
        0 => configured.to_string(),
        1 => "info".to_string(),
        _ => "debug".to_string(),
    }
}

/// Installs the stderr subscriber. `RUST_LOG` takes precedence over `level`.
pub fn init(level: &str) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|e| {
            PortfolioError::Telemetry(format!("invalid log level/filter '{level}': {e}"))
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(|e| PortfolioError::Telemetry(e.to_string()))
}
