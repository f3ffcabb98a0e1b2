use crate::models::{ActivityEvent, RawEvent};

/// How many events survive into the activity feed.
const FEED_LEN: usize = 10;

#[derive(Debug, Default)]
pub struct ActivitySummary {
    pub total_pushes: u32,
    pub total_issues: u32,
    pub total_pull_requests: u32,
    pub recent: Vec<ActivityEvent>,
}

/// Counts event kinds over the whole fetched batch and keeps the first
/// `FEED_LEN` entries (the feed arrives newest first) with kind-specific
/// enrichment for presentation.
pub fn summarize(events: &[RawEvent]) -> ActivitySummary {
    let mut summary = ActivitySummary::default();

    for event in events {
        match event.kind.as_str() {
            "PushEvent" => summary.total_pushes += 1,
            "IssuesEvent" => summary.total_issues += 1,
            "PullRequestEvent" => summary.total_pull_requests += 1,
            _ => {}
        }
    }

    summary.recent = events.iter().take(FEED_LEN).map(describe).collect();
    summary
}

fn describe(event: &RawEvent) -> ActivityEvent {
    let (action, commits, git_ref) = match event.kind.as_str() {
        "PushEvent" => (None, event.payload.size, event.payload.git_ref.clone()),
        "CreateEvent" => {
            let ref_type = event.payload.ref_type.as_deref().unwrap_or("repository");
            (
                Some(format!("Created {}", ref_type)),
                None,
                event.payload.git_ref.clone(),
            )
        }
        _ => (event.payload.action.clone(), None, None),
    };

    ActivityEvent {
        kind: event.kind.clone(),
        repo: event.repo.name.clone(),
        action,
        commits,
        git_ref,
        created_at: event.created_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventPayload, EventRepo};
    use chrono::{TimeZone, Utc};

    fn event(kind: &str, payload: EventPayload) -> RawEvent {
        RawEvent {
            kind: kind.to_string(),
            repo: EventRepo {
                name: "octocat/hello".to_string(),
            },
            payload,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_counters_by_kind() {
        let events = vec![
            event("PushEvent", EventPayload::default()),
            event("PushEvent", EventPayload::default()),
            event("IssuesEvent", EventPayload::default()),
            event("PullRequestEvent", EventPayload::default()),
            event("WatchEvent", EventPayload::default()),
        ];

        let summary = summarize(&events);
        assert_eq!(summary.total_pushes, 2);
        assert_eq!(summary.total_issues, 1);
        assert_eq!(summary.total_pull_requests, 1);
    }

    #[test]
    fn test_push_enrichment() {
        let events = vec![event(
            "PushEvent",
            EventPayload {
                size: Some(3),
                git_ref: Some("refs/heads/main".to_string()),
                ..Default::default()
            },
        )];

        let summary = summarize(&events);
        let entry = &summary.recent[0];
        assert_eq!(entry.commits, Some(3));
        assert_eq!(entry.git_ref.as_deref(), Some("refs/heads/main"));
        assert!(entry.action.is_none());
    }

    #[test]
    fn test_create_event_label() {
        let events = vec![event(
            "CreateEvent",
            EventPayload {
                ref_type: Some("branch".to_string()),
                git_ref: Some("feature".to_string()),
                ..Default::default()
            },
        )];

        let summary = summarize(&events);
        assert_eq!(summary.recent[0].action.as_deref(), Some("Created branch"));
    }

    #[test]
    fn test_action_verb_passthrough() {
        let events = vec![event(
            "PullRequestEvent",
            EventPayload {
                action: Some("opened".to_string()),
                ..Default::default()
            },
        )];

        let summary = summarize(&events);
        assert_eq!(summary.recent[0].action.as_deref(), Some("opened"));
    }

    #[test]
    fn test_feed_is_bounded() {
        let events: Vec<RawEvent> = (0..25)
            .map(|_| event("PushEvent", EventPayload::default()))
            .collect();

        let summary = summarize(&events);
        assert_eq!(summary.recent.len(), FEED_LEN);
        assert_eq!(summary.total_pushes, 25);
    }
}
