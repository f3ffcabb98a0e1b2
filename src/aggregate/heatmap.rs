use std::collections::HashMap;

use chrono::{Duration, NaiveDate};

use crate::models::ContributionDay;

/// Length of the contribution window, in calendar days.
pub const WINDOW_DAYS: i64 = 365;

/// Intensity bucket for one day's contribution count.
pub fn level(count: u32) -> u8 {
    match count {
        0 => 0,
        1..=2 => 1,
        3..=5 => 2,
        6..=8 => 3,
        _ => 4,
    }
}

/// The full window ending at `last`, oldest first. Days missing from
/// `counts` are zero.
pub fn build(last: NaiveDate, counts: &HashMap<NaiveDate, u32>) -> Vec<ContributionDay> {
    (0..WINDOW_DAYS)
        .rev()
        .map(|offset| {
            let date = last - Duration::days(offset);
            let count = counts.get(&date).copied().unwrap_or(0);
            ContributionDay {
                date,
                count,
                level: level(count),
            }
        })
        .collect()
}

/// (current, longest) streak of consecutive non-zero days. `days` must be
/// ordered oldest first; the current streak ends at the last entry.
pub fn streaks(days: &[ContributionDay]) -> (u32, u32) {
    let current = days.iter().rev().take_while(|d| d.count > 0).count() as u32;

    let mut longest = 0u32;
    let mut run = 0u32;
    for day in days {
        if day.count > 0 {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }

    (current, longest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn days_from_counts(counts: &[u32]) -> Vec<ContributionDay> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        counts
            .iter()
            .enumerate()
            .map(|(i, &count)| ContributionDay {
                date: start + Duration::days(i as i64),
                count,
                level: level(count),
            })
            .collect()
    }

    #[test]
    fn test_level_thresholds() {
        assert_eq!(level(0), 0);
        assert_eq!(level(1), 1);
        assert_eq!(level(2), 1);
        assert_eq!(level(3), 2);
        assert_eq!(level(5), 2);
        assert_eq!(level(6), 3);
        assert_eq!(level(8), 3);
        assert_eq!(level(9), 4);
        assert_eq!(level(100), 4);
    }

    #[test]
    fn test_build_covers_full_window_oldest_first() {
        let last = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let days = build(last, &HashMap::new());

        assert_eq!(days.len(), WINDOW_DAYS as usize);
        assert_eq!(days.last().unwrap().date, last);
        assert_eq!(days[0].date, last - Duration::days(WINDOW_DAYS - 1));
        assert!(days.iter().all(|d| d.count == 0 && d.level == 0));
    }

    #[test]
    fn test_build_picks_up_counts() {
        let last = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut counts = HashMap::new();
        counts.insert(last, 4);
        counts.insert(last - Duration::days(2), 9);

        let days = build(last, &counts);
        assert_eq!(days.last().unwrap().count, 4);
        assert_eq!(days.last().unwrap().level, 2);
        assert_eq!(days[days.len() - 3].level, 4);
    }

    #[test]
    fn test_streaks_current_ends_at_last_day() {
        let days = days_from_counts(&[1, 0, 2, 3, 1]);
        let (current, longest) = streaks(&days);
        assert_eq!(current, 3);
        assert_eq!(longest, 3);
    }

    #[test]
    fn test_streaks_zero_last_day_resets_current() {
        let days = days_from_counts(&[1, 1, 1, 1, 0]);
        let (current, longest) = streaks(&days);
        assert_eq!(current, 0);
        assert_eq!(longest, 4);
    }

    #[test]
    fn test_current_never_exceeds_longest() {
        for counts in [vec![], vec![0, 0], vec![2, 2, 2], vec![0, 5, 0, 1, 1]] {
            let (current, longest) = streaks(&days_from_counts(&counts));
            assert!(current <= longest);
        }
    }
}
