use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::event::ActivityEvent;
use super::user::Organization;

/// Per-repository facts surfaced in the ranked lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoSummary {
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub stars: u32,
    pub forks: u32,
    pub language: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// One language's share of the profile: how many repositories name it as
/// their primary language, and how many bytes the sampled repositories hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageStat {
    pub language: String,
    pub repos: u32,
    pub bytes: u64,
}

/// One calendar day of the contribution heatmap. `level` is derived from
/// `count` by fixed thresholds and drives the cell color client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionDay {
    pub date: NaiveDate,
    pub count: u32,
    pub level: u8,
}

/// The single output of the aggregator and the single input to presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregatedProfile {
    pub username: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub twitter_username: Option<String>,
    pub hireable: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub followers: u32,
    pub following: u32,
    pub public_repos: u32,
    pub public_gists: u32,

    pub total_commits: u32,
    pub total_stars: u32,
    pub total_forks: u32,
    pub total_pushes: u32,
    pub total_issues: u32,
    pub total_pull_requests: u32,

    pub top_languages: Vec<LanguageStat>,
    pub top_repositories: Vec<RepoSummary>,
    pub recent_repositories: Vec<RepoSummary>,
    pub recent_activity: Vec<ActivityEvent>,

    pub contribution_heatmap: Vec<ContributionDay>,
    pub current_streak: u32,
    pub longest_streak: u32,

    pub organizations: Vec<Organization>,
}
