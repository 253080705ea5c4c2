//! Priority score calculation.
//!
//! The score combines three factors:
//! - User-assigned importance (`base_score`)
//! - A per-type urgency weight (exams rank above clubs)
//! - Deadline proximity, measured in fractional days so the score climbs
//!   continuously rather than jumping at midnight
//!
//! ```text
//! priority = base_score * type_weight * 5 + time_component
//! time_component = 0                       (Workshop)
//!                = 50                      (days_until < 0)
//!                = 50 / (days_until + 1)   (otherwise)
//! ```
//!
//! Nothing here reads the system clock. The caller passes `now` in, which keeps
//! the calculation deterministic and lets a periodic refresh reuse it.

use chrono::NaiveDateTime;

use crate::activity::{Activity, ActivityType, PrioritizedActivity, Scheduled};
use crate::ranking::sort_activities;

/// Microseconds in one day.
pub const US_PER_DAY: f64 = 86_400_000_000.0;

/// Urgency granted to an activity starting right now, and to overdue ones.
pub const MAX_URGENCY: f64 = 50.0;

/// Multiplier applied to the weighted base score.
pub const BASE_MULTIPLIER: f64 = 5.0;

/// Urgency multiplier for an activity type.
pub fn type_weight(kind: ActivityType) -> f64 {
    match kind {
        ActivityType::Final => 1.5,
        ActivityType::Midterm => 1.4,
        ActivityType::Workshop => 1.1,
        ActivityType::Club | ActivityType::Personal | ActivityType::Other => 1.0,
    }
}

/// Fractional days from `now` until `instant`. Negative once `instant` has passed.
///
/// Measured in microseconds so a start passed by less than a millisecond
/// still counts as passed. Spans too large for `i64` microseconds fall back to
/// millisecond resolution.
pub fn days_until(instant: NaiveDateTime, now: NaiveDateTime) -> f64 {
    let delta = instant - now;
    let micros = match delta.num_microseconds() {
        Some(us) => us as f64,
        None => delta.num_milliseconds() as f64 * 1_000.0,
    };
    micros / US_PER_DAY
}

/// Proximity-based urgency term.
///
/// Workshops never gain urgency. Overdue activities are pinned at
/// [`MAX_URGENCY`] so the decaying formula cannot bury them; the `< 0` test is
/// strict.
pub fn time_component(kind: ActivityType, days_until: f64) -> f64 {
    if kind == ActivityType::Workshop {
        0.0
    } else if days_until < 0.0 {
        MAX_URGENCY
    } else {
        MAX_URGENCY / (days_until + 1.0)
    }
}

/// Score for the given inputs. Not clamped.
pub fn priority_score(kind: ActivityType, base_score: i32, days_until: f64) -> f64 {
    f64::from(base_score) * type_weight(kind) * BASE_MULTIPLIER + time_component(kind, days_until)
}

/// Scores activities against a fixed reference instant.
#[derive(Debug, Clone, Copy)]
pub struct PriorityCalculator {
    now: NaiveDateTime,
}

impl PriorityCalculator {
    /// Calculator pinned to `now` (local wall-clock).
    pub fn at(now: NaiveDateTime) -> Self {
        Self { now }
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    /// Attach `priority_score`, `is_overdue` and `is_today` to an activity.
    pub fn calculate(&self, activity: Activity) -> PrioritizedActivity {
        let days = days_until(activity.start(), self.now);
        let priority_score = priority_score(activity.kind, activity.base_score, days);
        let is_today = activity.date == self.now.date();
        let is_overdue = days < 0.0;

        tracing::debug!(
            id = %activity.id,
            kind = %activity.kind,
            days_until = days,
            priority_score,
            "scored activity"
        );

        PrioritizedActivity {
            activity,
            priority_score,
            is_overdue,
            is_today,
        }
    }

    /// Rescore a whole collection and return it sorted by descending priority.
    ///
    /// This is the periodic refresh step: derived fields from a previous tick
    /// are discarded, only the stored record is kept.
    pub fn refresh<I>(&self, activities: I) -> Vec<PrioritizedActivity>
    where
        I: IntoIterator<Item = Activity>,
    {
        let scored = activities.into_iter().map(|a| self.calculate(a)).collect();
        sort_activities(scored)
    }
}

/// Convenience wrapper around [`PriorityCalculator::calculate`].
pub fn calculate_priority(activity: Activity, now: NaiveDateTime) -> PrioritizedActivity {
    PriorityCalculator::at(now).calculate(activity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::NewActivity;
    use chrono::{Duration, NaiveDate, NaiveTime};

    const EPS: f64 = 1e-9;

    fn activity(kind: ActivityType, base_score: i32, date: (i32, u32, u32), time: (u32, u32)) -> Activity {
        NewActivity {
            name: format!("{kind} item"),
            kind,
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            time: NaiveTime::from_hms_opt(time.0, time.1, 0).unwrap(),
            duration_minutes: 60,
            base_score,
        }
        .with_id("test")
    }

    fn at(date: (i32, u32, u32), time: (u32, u32)) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .unwrap()
            .and_hms_opt(time.0, time.1, 0)
            .unwrap()
    }

    #[test]
    fn final_due_now_scores_125() {
        let a = activity(ActivityType::Final, 10, (2026, 12, 14), (9, 0));
        let scored = calculate_priority(a, at((2026, 12, 14), (9, 0)));
        assert!((scored.priority_score - 125.0).abs() < EPS);
        assert!(!scored.is_overdue);
        assert!(scored.is_today);
    }

    #[test]
    fn final_nine_days_out_scores_80() {
        let a = activity(ActivityType::Final, 10, (2026, 12, 14), (9, 0));
        let scored = calculate_priority(a, at((2026, 12, 5), (9, 0)));
        assert!((scored.priority_score - 80.0).abs() < EPS);
        assert!(!scored.is_today);
    }

    #[test]
    fn workshop_ignores_proximity() {
        for days_out in [0, 1, 3, 30] {
            let a = activity(ActivityType::Workshop, 5, (2026, 11, 1), (14, 0));
            let now = at((2026, 11, 1), (14, 0)) - Duration::days(days_out);
            let scored = calculate_priority(a, now);
            assert!((scored.priority_score - 27.5).abs() < EPS, "days_out={days_out}");
        }
    }

    #[test]
    fn overdue_pins_urgency_at_max() {
        let a = activity(ActivityType::Personal, 4, (2026, 10, 18), (8, 0));
        let scored = calculate_priority(a, at((2026, 10, 18), (8, 1)));
        assert!(scored.is_overdue);
        assert!(scored.is_today);
        assert!((scored.priority_score - (20.0 + MAX_URGENCY)).abs() < EPS);
    }

    #[test]
    fn start_passed_by_under_a_millisecond_is_overdue() {
        let a = activity(ActivityType::Final, 10, (2026, 12, 14), (9, 0));
        let now = at((2026, 12, 14), (9, 0)) + Duration::microseconds(500);
        assert!(days_until(a.start(), now) < 0.0);

        let scored = calculate_priority(a, now);
        assert!(scored.is_overdue);
        assert!((scored.priority_score - (75.0 + MAX_URGENCY)).abs() < EPS);
    }

    #[test]
    fn overdue_from_yesterday_is_not_today() {
        let a = activity(ActivityType::Club, 3, (2026, 10, 17), (23, 0));
        let scored = calculate_priority(a, at((2026, 10, 18), (0, 30)));
        assert!(scored.is_overdue);
        assert!(!scored.is_today);
    }

    #[test]
    fn later_today_is_today_but_not_overdue() {
        let a = activity(ActivityType::Other, 1, (2026, 10, 18), (23, 59));
        let scored = calculate_priority(a, at((2026, 10, 18), (0, 1)));
        assert!(scored.is_today);
        assert!(!scored.is_overdue);
    }

    #[test]
    fn score_rises_within_a_day() {
        let a = activity(ActivityType::Midterm, 8, (2026, 10, 20), (10, 0));
        let morning = calculate_priority(a.clone(), at((2026, 10, 19), (8, 0)));
        let evening = calculate_priority(a, at((2026, 10, 19), (20, 0)));
        assert!(evening.priority_score > morning.priority_score);
    }

    #[test]
    fn fractional_days_are_not_truncated() {
        let now = at((2026, 10, 18), (0, 0));
        assert!((days_until(now + Duration::hours(12), now) - 0.5).abs() < EPS);
        assert!((days_until(now - Duration::hours(6), now) + 0.25).abs() < EPS);
    }

    #[test]
    fn type_weights() {
        assert_eq!(type_weight(ActivityType::Final), 1.5);
        assert_eq!(type_weight(ActivityType::Midterm), 1.4);
        assert_eq!(type_weight(ActivityType::Workshop), 1.1);
        assert_eq!(type_weight(ActivityType::Club), 1.0);
        assert_eq!(type_weight(ActivityType::Personal), 1.0);
        assert_eq!(type_weight(ActivityType::Other), 1.0);
    }

    #[test]
    fn any_score_in_one_to_ten_is_accepted_for_any_type() {
        let now = at((2026, 10, 18), (12, 0));
        for kind in ActivityType::ALL {
            for base in 1..=10 {
                let scored = calculate_priority(activity(kind, base, (2026, 10, 25), (9, 0)), now);
                assert!(scored.priority_score.is_finite());
            }
        }
    }

    #[test]
    fn refresh_rescores_and_sorts() {
        let now = at((2026, 10, 18), (12, 0));
        let items = vec![
            activity(ActivityType::Club, 2, (2026, 11, 30), (9, 0)),
            activity(ActivityType::Final, 10, (2026, 10, 19), (9, 0)),
            activity(ActivityType::Workshop, 5, (2026, 10, 18), (13, 0)),
        ];
        let refreshed = PriorityCalculator::at(now).refresh(items);
        assert_eq!(refreshed[0].activity.kind, ActivityType::Final);
        assert_eq!(refreshed[2].activity.kind, ActivityType::Club);
    }
}
