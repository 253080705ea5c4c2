//! Ordering, filtering and workload aggregation over scored activities.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::activity::{PrioritizedActivity, Scheduled};

/// Sort by descending `priority_score`.
///
/// The sort is stable, so activities with equal scores keep their input order.
pub fn sort_activities(mut activities: Vec<PrioritizedActivity>) -> Vec<PrioritizedActivity> {
    activities.sort_by(|a, b| b.priority_score.total_cmp(&a.priority_score));
    activities
}

/// Total scheduled minutes on one date, for the workload chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    /// Short label such as `Oct 18`.
    pub label: String,
    /// Sum of `duration_minutes` on this date.
    pub load: u64,
}

/// Group activities by date and sum their durations, oldest date first.
pub fn aggregate_load<T: Scheduled>(activities: &[T]) -> Vec<ChartPoint> {
    let mut per_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for activity in activities {
        *per_day.entry(activity.date()).or_default() += u64::from(activity.duration_minutes());
    }

    per_day
        .into_iter()
        .map(|(date, load)| ChartPoint {
            date,
            label: date.format("%b %d").to_string(),
            load,
        })
        .collect()
}

/// List view filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityFilter {
    #[default]
    All,
    Today,
    HighPriority,
}

impl ActivityFilter {
    /// Whether `activity` is shown under this filter.
    ///
    /// `HighPriority` keeps scores strictly above `threshold`.
    pub fn matches(self, activity: &PrioritizedActivity, threshold: f64) -> bool {
        match self {
            Self::All => true,
            Self::Today => activity.is_today,
            Self::HighPriority => activity.priority_score > threshold,
        }
    }
}

impl fmt::Display for ActivityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => "all",
            Self::Today => "today",
            Self::HighPriority => "high",
        })
    }
}

impl FromStr for ActivityFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "today" => Ok(Self::Today),
            "high" | "high-priority" => Ok(Self::HighPriority),
            other => Err(format!("unknown filter '{other}' (expected all, today or high)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::{ActivityType, NewActivity};
    use chrono::NaiveTime;

    fn scored(id: &str, day: u32, duration_minutes: u32, priority_score: f64) -> PrioritizedActivity {
        PrioritizedActivity {
            activity: NewActivity {
                name: id.to_string(),
                kind: ActivityType::Other,
                date: NaiveDate::from_ymd_opt(2026, 10, day).unwrap(),
                time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                duration_minutes,
                base_score: 5,
            }
            .with_id(id),
            priority_score,
            is_overdue: false,
            is_today: day == 18,
        }
    }

    fn ids(items: &[PrioritizedActivity]) -> Vec<&str> {
        items.iter().map(|a| a.id()).collect()
    }

    #[test]
    fn sorts_descending() {
        let sorted = sort_activities(vec![
            scored("low", 20, 30, 10.0),
            scored("high", 20, 30, 90.0),
            scored("mid", 20, 30, 45.5),
        ]);
        assert_eq!(ids(&sorted), vec!["high", "mid", "low"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let sorted = sort_activities(vec![
            scored("first", 20, 30, 50.0),
            scored("top", 20, 30, 60.0),
            scored("second", 21, 30, 50.0),
            scored("third", 22, 30, 50.0),
        ]);
        assert_eq!(ids(&sorted), vec!["top", "first", "second", "third"]);
    }

    #[test]
    fn same_date_durations_are_summed() {
        let points = aggregate_load(&[scored("a", 20, 60, 1.0), scored("b", 20, 45, 1.0)]);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].load, 105);
        assert_eq!(points[0].label, "Oct 20");
    }

    #[test]
    fn chart_points_are_chronological() {
        let points = aggregate_load(&[
            scored("c", 25, 30, 1.0),
            scored("a", 19, 15, 1.0),
            scored("b", 22, 90, 1.0),
            scored("d", 19, 45, 1.0),
        ]);
        let days: Vec<u32> = points.iter().map(|p| chrono::Datelike::day(&p.date)).collect();
        assert_eq!(days, vec![19, 22, 25]);
        assert_eq!(points[0].load, 60);
    }

    #[test]
    fn empty_collection_has_no_points() {
        assert!(aggregate_load::<PrioritizedActivity>(&[]).is_empty());
    }

    #[test]
    fn filters() {
        let today = scored("today", 18, 30, 40.0);
        let urgent = scored("urgent", 25, 30, 50.5);
        let edge = scored("edge", 25, 30, 50.0);

        assert!(ActivityFilter::All.matches(&edge, 50.0));
        assert!(ActivityFilter::Today.matches(&today, 50.0));
        assert!(!ActivityFilter::Today.matches(&urgent, 50.0));
        assert!(ActivityFilter::HighPriority.matches(&urgent, 50.0));
        assert!(!ActivityFilter::HighPriority.matches(&edge, 50.0));
    }

    #[test]
    fn filter_parses_cli_names() {
        assert_eq!("high".parse::<ActivityFilter>().unwrap(), ActivityFilter::HighPriority);
        assert_eq!("Today".parse::<ActivityFilter>().unwrap(), ActivityFilter::Today);
        assert!("soon".parse::<ActivityFilter>().is_err());
    }
}
