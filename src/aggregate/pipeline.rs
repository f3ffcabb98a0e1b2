use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use futures::future::join_all;
use tokio::sync::Semaphore;

use crate::config::AggregatorConfig;
use crate::contributions::ContributionSource;
use crate::error::{Error, Result};
use crate::github::GitHubClient;
use crate::models::{AggregatedProfile, Repository};

use super::languages::TOP_LANGUAGES;
use super::{activity, heatmap, repo_stats};

pub struct Aggregator {
    github: Arc<GitHubClient>,
    contributions: Arc<dyn ContributionSource>,
    config: AggregatorConfig,
}

impl Aggregator {
    pub fn new(
        github: Arc<GitHubClient>,
        contributions: impl ContributionSource + 'static,
        config: AggregatorConfig,
    ) -> Self {
        Self {
            github,
            contributions: Arc::new(contributions),
            config,
        }
    }

    /// Full aggregation for one handle. Only the profile and repository-list
    /// fetches can fail the whole call; every other upstream call degrades to
    /// an empty or zero contribution and is logged.
    pub async fn aggregate_user(&self, username: &str) -> Result<AggregatedProfile> {
        let username = username.trim();
        if username.is_empty() {
            return Err(Error::MissingUsername);
        }

        // Step 1: profile. 404 fails fast, everything else is upstream error.
        let user = self.github.get_user(username).await?;

        // Step 2: repository listing, newest first, one page of up to 100.
        let repos = self.github.get_user_repos(username).await?;
        tracing::info!("Found {} repositories for {}", repos.len(), username);

        // Step 3: one-pass reduce over the listing.
        let mut stats = repo_stats::reduce(&repos);

        // Steps 4-5: bounded fan-out for commits and language bytes.
        let sample = &repos[..repos.len().min(self.config.repo_sample_size)];
        let (total_commits, language_maps) = self.fetch_repo_details(username, sample).await;
        for map in &language_maps {
            stats.tally.add_bytes(map);
        }
        tracing::info!("Counted {} commits across {} repos", total_commits, sample.len());

        // Step 6: recent public events, best-effort.
        let events = match self
            .github
            .get_public_events(username, self.config.events_page_size)
            .await
        {
            Ok(events) => events,
            Err(e) => {
                tracing::warn!("Failed to fetch events for {}: {}", username, e);
                Vec::new()
            }
        };
        let activity = activity::summarize(&events);

        // Steps 7-8: contribution window and streaks, best-effort.
        let contribution_heatmap = match self.contributions.contributions(username).await {
            Ok(days) => days,
            Err(e) => {
                tracing::warn!("Failed to fetch contributions for {}: {}", username, e);
                heatmap::build(Utc::now().date_naive(), &HashMap::new())
            }
        };
        let (current_streak, longest_streak) = heatmap::streaks(&contribution_heatmap);

        // Step 9: organization memberships, best-effort.
        let organizations = match self.github.get_user_orgs(username).await {
            Ok(orgs) => orgs
                .into_iter()
                .map(|mut org| {
                    org.url = org
                        .url
                        .or_else(|| Some(format!("https://github.com/{}", org.login)));
                    org
                })
                .collect(),
            Err(e) => {
                tracing::warn!("Failed to fetch organizations for {}: {}", username, e);
                Vec::new()
            }
        };

        // Step 10: assemble.
        Ok(AggregatedProfile {
            username: user.login,
            name: user.name,
            avatar_url: user.avatar_url,
            bio: user.bio,
            location: user.location,
            company: user.company,
            blog: user.blog,
            twitter_username: user.twitter_username,
            hireable: user.hireable,
            created_at: user.created_at,
            followers: user.followers,
            following: user.following,
            public_repos: user.public_repos,
            public_gists: user.public_gists,
            total_commits,
            total_stars: stats.total_stars,
            total_forks: stats.total_forks,
            total_pushes: activity.total_pushes,
            total_issues: activity.total_issues,
            total_pull_requests: activity.total_pull_requests,
            top_languages: stats.tally.into_ranked(TOP_LANGUAGES),
            top_repositories: stats.top_repositories,
            recent_repositories: stats.recent_repositories,
            recent_activity: activity.recent,
            contribution_heatmap,
            current_streak,
            longest_streak,
            organizations,
        })
    }

    /// Fan-out over the sampled repositories: commit count and language byte
    /// map per repo, joined before reduction. A failure on either call for a
    /// single repository contributes zero/empty for that repository.
    async fn fetch_repo_details(
        &self,
        username: &str,
        sample: &[Repository],
    ) -> (u32, Vec<HashMap<String, u64>>) {
        let semaphore = Arc::new(Semaphore::new(self.config.concurrency_limit));
        let mut detail_futures = Vec::new();

        for repo in sample {
            let github = self.github.clone();
            let sem = semaphore.clone();
            let owner = repo.owner.login.clone();
            let name = repo.name.clone();
            let author = username.to_string();
            let max_commits = self.config.max_commits_per_repo;

            detail_futures.push(async move {
                let _permit = sem.acquire().await.ok()?;

                let commits = match github
                    .count_author_commits(&owner, &name, &author, max_commits)
                    .await
                {
                    Ok(count) => count,
                    Err(e) => {
                        tracing::warn!("Failed to count commits for {}/{}: {}", owner, name, e);
                        0
                    }
                };

                let languages = match github.get_repo_languages(&owner, &name).await {
                    Ok(map) => map,
                    Err(e) => {
                        tracing::warn!("Failed to fetch languages for {}/{}: {}", owner, name, e);
                        HashMap::new()
                    }
                };

                Some((commits, languages))
            });
        }

        let results = join_all(detail_futures).await;

        let mut total_commits = 0u32;
        let mut language_maps = Vec::new();
        for (commits, languages) in results.into_iter().flatten() {
            total_commits += commits;
            language_maps.push(languages);
        }

        (total_commits, language_maps)
    }
}
