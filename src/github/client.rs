use reqwest::{header, Client};
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::models::{CommitRef, GitHubUser, Organization, RawEvent, Repository};

pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("gitpulse/0.1"),
        );
        if let Some(token) = token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn get_user(&self, username: &str) -> Result<GitHubUser> {
        let url = format!("{}/users/{}", self.base_url, username);
        tracing::info!("Fetching user: {}", username);

        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::UserNotFound(username.to_string()));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::GitHubApi(format!(
                "Failed to fetch user {}: {} - {}",
                username, status, body
            )));
        }

        Ok(response.json().await?)
    }

    /// First page of the repository listing, newest activity first. The
    /// aggregation only ever considers up to 100 repositories, so one page
    /// is the whole window.
    pub async fn get_user_repos(&self, username: &str) -> Result<Vec<Repository>> {
        let url = format!(
            "{}/users/{}/repos?type=all&sort=updated&per_page=100",
            self.base_url, username
        );
        tracing::info!("Fetching repositories for: {}", username);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::GitHubApi(format!(
                "Failed to fetch repositories for {}: {} - {}",
                username, status, body
            )));
        }

        Ok(response.json().await?)
    }

    /// Number of commits authored by `author` in one repository, capped at
    /// `max_commits` (the listing length is the count).
    pub async fn count_author_commits(
        &self,
        owner: &str,
        repo: &str,
        author: &str,
        max_commits: u32,
    ) -> Result<u32> {
        let url = format!(
            "{}/repos/{}/{}/commits?author={}&per_page={}",
            self.base_url, owner, repo, author, max_commits
        );
        tracing::debug!("Fetching commits for: {}/{}", owner, repo);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Error::GitHubApi(format!(
                "Failed to fetch commits for {}/{}: {}",
                owner, repo, status
            )));
        }

        let commits: Vec<CommitRef> = response.json().await?;
        Ok(commits.len() as u32)
    }

    pub async fn get_repo_languages(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<HashMap<String, u64>> {
        let url = format!("{}/repos/{}/{}/languages", self.base_url, owner, repo);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Ok(HashMap::new());
        }

        Ok(response.json().await?)
    }

    pub async fn get_public_events(
        &self,
        username: &str,
        per_page: u32,
    ) -> Result<Vec<RawEvent>> {
        let url = format!(
            "{}/users/{}/events/public?per_page={}",
            self.base_url, username, per_page
        );
        tracing::debug!("Fetching public events for: {}", username);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Error::GitHubApi(format!(
                "Failed to fetch events for {}: {}",
                username, status
            )));
        }

        Ok(response.json().await?)
    }

    pub async fn get_user_orgs(&self, username: &str) -> Result<Vec<Organization>> {
        let url = format!("{}/users/{}/orgs", self.base_url, username);
        tracing::debug!("Fetching organizations for: {}", username);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Error::GitHubApi(format!(
                "Failed to fetch organizations for {}: {}",
                username, status
            )));
        }

        Ok(response.json().await?)
    }
}
