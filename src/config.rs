use std::env;

use crate::error::Result;

#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: Option<String>,
    pub api_base_url: String,
    pub repo_sample_size: usize,
    pub events_page_size: u32,
    pub max_commits_per_repo: u32,
    pub concurrency_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Unauthenticated requests work at a lower rate limit; the token is
        // attached when present, never required.
        let github_token = env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());

        let api_base_url = env::var("GITHUB_API_URL")
            .unwrap_or_else(|_| "https://api.github.com".to_string());

        let repo_sample_size = env::var("REPO_SAMPLE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let events_page_size = env::var("EVENTS_PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(100);

        let max_commits_per_repo = env::var("MAX_COMMITS_PER_REPO")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(100);

        let concurrency_limit = env::var("CONCURRENCY_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Ok(Self {
            github_token,
            api_base_url,
            repo_sample_size,
            events_page_size,
            max_commits_per_repo,
            concurrency_limit,
        })
    }
}

#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    pub repo_sample_size: usize,
    pub events_page_size: u32,
    pub max_commits_per_repo: u32,
    pub concurrency_limit: usize,
}

impl From<&Config> for AggregatorConfig {
    fn from(config: &Config) -> Self {
        Self {
            repo_sample_size: config.repo_sample_size,
            events_page_size: config.events_page_size,
            max_commits_per_repo: config.max_commits_per_repo,
            concurrency_limit: config.concurrency_limit,
        }
    }
}
