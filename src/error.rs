use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing username")]
    MissingUsername,

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;
