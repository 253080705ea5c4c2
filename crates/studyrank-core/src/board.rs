//! Caller-side owner of the activity collection.
//!
//! The board keeps activities in ranked order and applies the pipeline
//! new activity -> overlap check -> score -> insert -> sort. Every method that
//! depends on freshness takes `now` explicitly; the board never reads the
//! clock itself.

use chrono::NaiveDateTime;

use crate::activity::{Activity, NewActivity, PrioritizedActivity};
use crate::error::ValidationError;
use crate::priority::PriorityCalculator;
use crate::ranking::{aggregate_load, sort_activities, ActivityFilter, ChartPoint};
use crate::validation::ensure_no_overlap;

#[derive(Debug, Clone, Default)]
pub struct ActivityBoard {
    items: Vec<PrioritizedActivity>,
}

impl ActivityBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from stored records, scoring each against `now`.
    pub fn load(activities: Vec<Activity>, now: NaiveDateTime) -> Self {
        Self {
            items: PriorityCalculator::at(now).refresh(activities),
        }
    }

    /// Accept a new activity unless it overlaps an existing one.
    pub fn add(
        &mut self,
        draft: NewActivity,
        now: NaiveDateTime,
    ) -> Result<PrioritizedActivity, ValidationError> {
        ensure_no_overlap(&draft, &self.items)?;

        let scored = PriorityCalculator::at(now).calculate(draft.into_activity());
        tracing::info!(id = scored.id(), score = scored.priority_score, "added activity");

        let mut items = std::mem::take(&mut self.items);
        items.push(scored.clone());
        self.items = sort_activities(items);
        Ok(scored)
    }

    /// Remove by id, returning the stored record if it existed.
    pub fn remove(&mut self, id: &str) -> Option<Activity> {
        let index = self.items.iter().position(|a| a.id() == id)?;
        let removed = self.items.remove(index).into_activity();
        tracing::info!(id, "removed activity");
        Some(removed)
    }

    /// Recompute every derived field against `now` and re-sort.
    pub fn refresh(&mut self, now: NaiveDateTime) {
        let stored = std::mem::take(&mut self.items)
            .into_iter()
            .map(PrioritizedActivity::into_activity);
        self.items = PriorityCalculator::at(now).refresh(stored);
        tracing::debug!(count = self.items.len(), %now, "refreshed priorities");
    }

    /// Replace the whole collection, scoring against `now`.
    pub fn replace(&mut self, activities: Vec<PrioritizedActivity>, now: NaiveDateTime) {
        self.items = activities;
        self.refresh(now);
    }

    /// Ranked activities, highest priority first.
    pub fn ranked(&self) -> &[PrioritizedActivity] {
        &self.items
    }

    pub fn filtered(&self, filter: ActivityFilter, threshold: f64) -> Vec<&PrioritizedActivity> {
        self.items
            .iter()
            .filter(|a| filter.matches(a, threshold))
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&PrioritizedActivity> {
        self.items.iter().find(|a| a.id() == id)
    }

    /// Workload per date for the chart.
    pub fn chart(&self) -> Vec<ChartPoint> {
        aggregate_load(&self.items)
    }

    /// Stored records in ranked order, ready for persistence.
    pub fn activities(&self) -> Vec<Activity> {
        self.items.iter().map(|a| a.activity.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
