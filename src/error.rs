use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("profile parse error: {0}")]
    ProfileParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("username or URL cannot be empty")]
    EmptyUsername,

    #[error("invalid GitHub username or URL: {0}")]
    InvalidUsername(String),

    #[error("telemetry error: {0}")]
    Telemetry(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
