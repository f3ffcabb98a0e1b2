use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};

use crate::aggregate::heatmap;
use crate::error::Result;
use crate::github::GitHubClient;
use crate::models::{ContributionDay, RawEvent};

/// Source of per-day contribution counts for the heatmap.
///
/// The REST API does not expose the contribution calendar, so the default
/// implementation approximates it from the public events feed. Anything that
/// can produce a 365-day window (the GraphQL contributions API, recorded
/// fixtures) plugs in behind this trait.
#[async_trait]
pub trait ContributionSource: Send + Sync {
    /// 365 calendar days ending today (UTC), oldest first, levels included.
    async fn contributions(&self, username: &str) -> Result<Vec<ContributionDay>>;
}

/// Derives contribution counts from the public events feed: pushed commits
/// plus opened issues and pull requests, bucketed by UTC day. Days older
/// than the feed's retention come out as zero.
pub struct EventContributionSource {
    github: Arc<GitHubClient>,
    page_size: u32,
}

impl EventContributionSource {
    pub fn new(github: Arc<GitHubClient>, page_size: u32) -> Self {
        Self { github, page_size }
    }
}

#[async_trait]
impl ContributionSource for EventContributionSource {
    async fn contributions(&self, username: &str) -> Result<Vec<ContributionDay>> {
        let events = self
            .github
            .get_public_events(username, self.page_size)
            .await?;
        let counts = bucket_by_day(&events);
        Ok(heatmap::build(Utc::now().date_naive(), &counts))
    }
}

fn bucket_by_day(events: &[RawEvent]) -> HashMap<NaiveDate, u32> {
    let mut counts: HashMap<NaiveDate, u32> = HashMap::new();

    for event in events {
        let weight = match event.kind.as_str() {
            "PushEvent" => event.payload.size.unwrap_or(1),
            "IssuesEvent" | "PullRequestEvent" => {
                if event.payload.action.as_deref() == Some("opened") {
                    1
                } else {
                    0
                }
            }
            _ => 0,
        };

        if weight > 0 {
            *counts.entry(event.created_at.date_naive()).or_default() += weight;
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventPayload, EventRepo};
    use chrono::TimeZone;

    fn event(kind: &str, day: u32, payload: EventPayload) -> RawEvent {
        RawEvent {
            kind: kind.to_string(),
            repo: EventRepo {
                name: "octocat/hello".to_string(),
            },
            payload,
            created_at: Utc.with_ymd_and_hms(2024, 5, day, 10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_pushes_weighted_by_commit_count() {
        let events = vec![
            event(
                "PushEvent",
                1,
                EventPayload {
                    size: Some(4),
                    ..Default::default()
                },
            ),
            event("PushEvent", 1, EventPayload::default()),
        ];

        let counts = bucket_by_day(&events);
        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(counts.get(&day), Some(&5));
    }

    #[test]
    fn test_only_opened_issues_and_prs_count() {
        let events = vec![
            event(
                "IssuesEvent",
                2,
                EventPayload {
                    action: Some("opened".to_string()),
                    ..Default::default()
                },
            ),
            event(
                "PullRequestEvent",
                2,
                EventPayload {
                    action: Some("closed".to_string()),
                    ..Default::default()
                },
            ),
            event("WatchEvent", 2, EventPayload::default()),
        ];

        let counts = bucket_by_day(&events);
        let day = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        assert_eq!(counts.get(&day), Some(&1));
    }

    #[test]
    fn test_empty_feed_buckets_nothing() {
        assert!(bucket_by_day(&[]).is_empty());
    }
}
