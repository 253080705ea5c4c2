//! Same-day booking conflict detection.
//!
//! Each activity occupies the half-open interval `[start, start + duration)`.
//! Two activities conflict when they share a date and their intervals
//! intersect; an activity ending at 11:00 does not conflict with one starting
//! at 11:00.
//!
//! Only activities on the same date are compared. An activity running past
//! midnight is not checked against the next day's bookings.

use crate::activity::Scheduled;

/// Whether two activities on the same date have intersecting intervals.
pub fn overlaps<A, B>(a: &A, b: &B) -> bool
where
    A: Scheduled + ?Sized,
    B: Scheduled + ?Sized,
{
    a.date() == b.date() && a.start() < b.end() && b.start() < a.end()
}

/// First existing activity that conflicts with `candidate`, if any.
pub fn find_conflict<'a, C, T>(candidate: &C, existing: &'a [T]) -> Option<&'a T>
where
    C: Scheduled + ?Sized,
    T: Scheduled,
{
    existing.iter().find(|other| overlaps(candidate, *other))
}

/// Whether `candidate` conflicts with any activity in `existing`.
pub fn check_overlap<C, T>(candidate: &C, existing: &[T]) -> bool
where
    C: Scheduled + ?Sized,
    T: Scheduled,
{
    find_conflict(candidate, existing).is_some()
}
