//! Randomized sample schedules for trying the tool out.

use chrono::{Duration, NaiveDateTime, NaiveTime};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::activity::{ActivityType, NewActivity, PrioritizedActivity};
use crate::priority::PriorityCalculator;

const SUBJECTS: [&str; 6] = ["Calculus", "Physics", "History", "Comp Sci", "Literature", "Economics"];
const TASKS: [&str; 6] = [
    "Homework",
    "Project",
    "Study Session",
    "Exam Prep",
    "Group Meeting",
    "Lab Report",
];
const DURATIONS: [u32; 5] = [15, 30, 45, 60, 75];

/// Default number of generated activities.
pub const DEFAULT_COUNT: usize = 20;

/// Days ahead of `now` that generated activities may fall on.
pub const HORIZON_DAYS: i64 = 14;

/// Deterministic generator for tests and `--seed`.
pub fn seeded_rng(seed: u64) -> Pcg64 {
    Pcg64::seed_from_u64(seed)
}

/// Generator seeded from OS entropy.
pub fn entropy_rng() -> Pcg64 {
    Pcg64::from_entropy()
}

/// Generate `count` scored activities within the next two weeks, sorted.
///
/// Start times fall on the hour between 09:00 and 18:00. Overlaps between
/// generated items are not filtered out.
pub fn generate<R: Rng + ?Sized>(
    now: NaiveDateTime,
    rng: &mut R,
    count: usize,
) -> Vec<PrioritizedActivity> {
    let today = now.date();
    let activities = (0..count).map(|_| {
        let kind = *ActivityType::ALL.choose(rng).unwrap_or(&ActivityType::Other);
        let subject = SUBJECTS.choose(rng).copied().unwrap_or("General");
        let task = TASKS.choose(rng).copied().unwrap_or("Study Session");
        let date = today + Duration::days(rng.gen_range(0..HORIZON_DAYS));
        let hour = rng.gen_range(9..19);

        NewActivity {
            name: format!("{subject} {task}"),
            kind,
            date,
            time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN),
            duration_minutes: DURATIONS.choose(rng).copied().unwrap_or(60),
            base_score: rng.gen_range(1..=10),
        }
        .into_activity()
    });

    PriorityCalculator::at(now).refresh(activities.collect::<Vec<_>>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    #[test]
    fn generates_requested_count_within_bounds() {
        let items = generate(now(), &mut seeded_rng(7), DEFAULT_COUNT);
        assert_eq!(items.len(), DEFAULT_COUNT);

        for item in &items {
            let a = &item.activity;
            assert!(a.date >= now().date());
            assert!(a.date < now().date() + Duration::days(HORIZON_DAYS));
            assert!((9..=18).contains(&a.time.hour()));
            assert_eq!(a.time.minute(), 0);
            assert!(DURATIONS.contains(&a.duration_minutes));
            assert!((1..=10).contains(&a.base_score));
        }
    }

    #[test]
    fn output_is_sorted() {
        let items = generate(now(), &mut seeded_rng(42), 50);
        assert!(items
            .windows(2)
            .all(|w| w[0].priority_score >= w[1].priority_score));
    }

    #[test]
    fn same_seed_same_schedule_shape() {
        let a = generate(now(), &mut seeded_rng(3), 10);
        let b = generate(now(), &mut seeded_rng(3), 10);
        let shape = |items: &[PrioritizedActivity]| {
            items
                .iter()
                .map(|i| (i.activity.name.clone(), i.activity.date, i.activity.time, i.priority_score))
                .collect::<Vec<_>>()
        };
        assert_eq!(shape(&a), shape(&b));
    }
}
