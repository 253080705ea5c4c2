//! Property tests for scoring, overlap and ranking invariants.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use proptest::prelude::*;
use proptest::sample::select;

use studyrank_core::priority::{time_component, MAX_URGENCY};
use studyrank_core::{
    calculate_priority, check_overlap, sort_activities, Activity, ActivityType, NewActivity,
    PrioritizedActivity,
};

fn base_instant() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 18)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn non_workshop() -> impl Strategy<Value = ActivityType> {
    select(vec![
        ActivityType::Final,
        ActivityType::Midterm,
        ActivityType::Club,
        ActivityType::Personal,
        ActivityType::Other,
    ])
}

fn any_kind() -> impl Strategy<Value = ActivityType> {
    select(ActivityType::ALL.to_vec())
}

fn slot(id: String, day: u32, start_minute: u32, duration_minutes: u32) -> Activity {
    NewActivity {
        name: id.clone(),
        kind: ActivityType::Other,
        date: NaiveDate::from_ymd_opt(2026, 10, day).unwrap(),
        time: NaiveTime::from_hms_opt(start_minute / 60, start_minute % 60, 0).unwrap(),
        duration_minutes,
        base_score: 5,
    }
    .with_id(id)
}

fn scored(kind: ActivityType, base_score: i32, offset_minutes: i64) -> PrioritizedActivity {
    let start = base_instant() + Duration::minutes(offset_minutes);
    let activity = NewActivity {
        name: "p".to_string(),
        kind,
        date: start.date(),
        time: start.time(),
        duration_minutes: 30,
        base_score,
    }
    .with_id(format!("{kind}-{base_score}-{offset_minutes}"));
    calculate_priority(activity, base_instant())
}

proptest! {
    #[test]
    fn workshop_never_gains_urgency(days in -400.0f64..400.0) {
        prop_assert_eq!(time_component(ActivityType::Workshop, days), 0.0);
    }

    #[test]
    fn workshop_score_is_constant(base in 1i32..=10, offset in 0i64..(60 * 24 * 60)) {
        let s = scored(ActivityType::Workshop, base, offset);
        let expected = f64::from(base) * 1.1 * 5.0;
        prop_assert!((s.priority_score - expected).abs() < 1e-9);
    }

    #[test]
    fn urgency_strictly_decreases_with_distance(
        kind in non_workshop(),
        near in 0.0f64..500.0,
        gap in 0.001f64..500.0,
    ) {
        prop_assert!(time_component(kind, near) > time_component(kind, near + gap));
    }

    #[test]
    fn overdue_items_are_pinned(kind in non_workshop(), base in 1i32..=10, minutes_ago in 1i64..(60 * 24 * 90)) {
        let s = scored(kind, base, -minutes_ago);
        prop_assert!(s.is_overdue);
        let base_term = s.priority_score - MAX_URGENCY;
        prop_assert!(base_term > 0.0);
        prop_assert!((time_component(kind, -(minutes_ago as f64) / 1440.0) - MAX_URGENCY).abs() < 1e-12);
    }

    #[test]
    fn future_items_are_not_overdue(kind in any_kind(), base in 1i32..=10, minutes_ahead in 0i64..(60 * 24 * 90)) {
        prop_assert!(!scored(kind, base, minutes_ahead).is_overdue);
    }

    #[test]
    fn sort_is_non_increasing_and_idempotent(
        items in prop::collection::vec((any_kind(), 1i32..=10, -5000i64..50_000), 0..40)
    ) {
        let input: Vec<_> = items.into_iter().map(|(k, b, o)| scored(k, b, o)).collect();
        let once = sort_activities(input);
        prop_assert!(once.windows(2).all(|w| w[0].priority_score >= w[1].priority_score));
        let twice = sort_activities(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn overlap_is_symmetric(
        day_a in 18u32..21, start_a in 0u32..(23 * 60), dur_a in 1u32..240,
        day_b in 18u32..21, start_b in 0u32..(23 * 60), dur_b in 1u32..240,
    ) {
        let a = slot("a".into(), day_a, start_a, dur_a);
        let b = slot("b".into(), day_b, start_b, dur_b);
        prop_assert_eq!(
            check_overlap(&a, std::slice::from_ref(&b)),
            check_overlap(&b, std::slice::from_ref(&a))
        );
    }

    #[test]
    fn back_to_back_never_overlaps(start in 0u32..(20 * 60), dur_a in 1u32..120, dur_b in 1u32..120) {
        let a = slot("a".into(), 20, start, dur_a);
        let b = slot("b".into(), 20, start + dur_a, dur_b);
        prop_assert!(!check_overlap(&b, std::slice::from_ref(&a)));
    }
}

#[test]
fn boundary_at_start_instant_is_not_overdue() {
    let s = scored(ActivityType::Final, 10, 0);
    assert!(!s.is_overdue);
    assert!((s.priority_score - 125.0).abs() < 1e-9);

    let just_missed = calculate_priority(
        NewActivity {
            name: "x".into(),
            kind: ActivityType::Final,
            date: base_instant().date(),
            time: base_instant().time(),
            duration_minutes: 30,
            base_score: 10,
        }
        .with_id("x"),
        base_instant() + Duration::milliseconds(1),
    );
    assert!(just_missed.is_overdue);
    assert!((just_missed.priority_score - 125.0).abs() < 1e-9);
}
