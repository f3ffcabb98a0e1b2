use crate::models::{RepoSummary, Repository};

use super::languages::LanguageTally;

const TOP_REPOS: usize = 5;
const RECENT_REPOS: usize = 5;

/// Everything derivable from the repository listing alone, in one pass plus
/// two bounded rankings. Byte counts are filled in later from the sampled
/// language endpoints.
#[derive(Debug, Default)]
pub struct RepoStats {
    pub total_stars: u32,
    pub total_forks: u32,
    pub tally: LanguageTally,
    pub top_repositories: Vec<RepoSummary>,
    pub recent_repositories: Vec<RepoSummary>,
}

pub fn reduce(repos: &[Repository]) -> RepoStats {
    let mut stats = RepoStats::default();

    for repo in repos {
        stats.total_stars += repo.stargazers_count;
        stats.total_forks += repo.forks_count;
        if let Some(language) = &repo.language {
            stats.tally.record_repo(language);
        }
    }

    // sort_by is stable, so ties keep the upstream listing order.
    let mut by_stars: Vec<&Repository> = repos.iter().collect();
    by_stars.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
    stats.top_repositories = by_stars.iter().take(TOP_REPOS).map(|r| summarize(r)).collect();

    let mut by_update: Vec<&Repository> = repos.iter().collect();
    by_update.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    stats.recent_repositories = by_update
        .iter()
        .take(RECENT_REPOS)
        .map(|r| summarize(r))
        .collect();

    stats
}

fn summarize(repo: &Repository) -> RepoSummary {
    RepoSummary {
        name: repo.name.clone(),
        url: repo.html_url.clone(),
        description: repo.description.clone(),
        stars: repo.stargazers_count,
        forks: repo.forks_count,
        language: repo.language.clone(),
        updated_at: repo.updated_at,
    }
}
