//! Input form validation.
//!
//! Raw form fields arrive as optional strings. A submission is accepted only
//! when name, date and time are present and parseable, the importance lies in
//! the type's range, and the slot does not collide with an existing booking.

use serde::{Deserialize, Serialize};

use crate::activity::{
    parse_date, parse_time, ActivityType, NewActivity, Scheduled, DEFAULT_DURATION_MINUTES,
};
use crate::error::ValidationError;
use crate::overlap::find_conflict;

/// Unvalidated form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityForm {
    pub name: Option<String>,
    pub kind: ActivityType,
    pub date: Option<String>,
    pub time: Option<String>,
    pub duration_minutes: u32,
    /// Falls back to the type's default importance when absent.
    pub base_score: Option<i32>,
}

impl Default for ActivityForm {
    fn default() -> Self {
        Self {
            name: None,
            kind: ActivityType::Other,
            date: None,
            time: None,
            duration_minutes: DEFAULT_DURATION_MINUTES,
            base_score: None,
        }
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl ActivityForm {
    /// Check field presence and shape, producing a draft ready for scheduling.
    pub fn parse(&self) -> Result<NewActivity, ValidationError> {
        let name = present(&self.name);
        let date = present(&self.date);
        let time = present(&self.time);

        let (Some(name), Some(date), Some(time)) = (name, date, time) else {
            let missing = [("name", name), ("date", date), ("time", time)]
                .into_iter()
                .filter(|(_, value)| value.is_none())
                .map(|(field, _)| field)
                .collect();
            return Err(ValidationError::MissingFields { missing });
        };

        let date = parse_date(date).map_err(|_| ValidationError::InvalidDate(date.to_string()))?;
        let time = parse_time(time).map_err(|_| ValidationError::InvalidTime(time.to_string()))?;

        if self.duration_minutes == 0 {
            return Err(ValidationError::InvalidDuration);
        }

        let range = self.kind.importance_range();
        let base_score = self.base_score.unwrap_or(range.default);
        if !range.contains(base_score) {
            return Err(ValidationError::ScoreOutOfRange {
                kind: self.kind,
                score: base_score,
                label: range.label,
            });
        }

        Ok(NewActivity {
            name: name.to_string(),
            kind: self.kind,
            date,
            time,
            duration_minutes: self.duration_minutes,
            base_score,
        })
    }

    /// Parse the form and reject it if it overlaps anything in `existing`.
    pub fn submit<T>(&self, existing: &[T]) -> Result<NewActivity, ValidationError>
    where
        T: Scheduled + Named,
    {
        let draft = self.parse()?;
        ensure_no_overlap(&draft, existing)?;
        Ok(draft)
    }
}

/// Identity used when reporting which booking a candidate collides with.
pub trait Named {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
}

impl Named for crate::activity::Activity {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for crate::activity::PrioritizedActivity {
    fn id(&self) -> &str {
        &self.activity.id
    }
    fn name(&self) -> &str {
        &self.activity.name
    }
}

/// Turn an overlap into a user-facing rejection.
pub fn ensure_no_overlap<C, T>(candidate: &C, existing: &[T]) -> Result<(), ValidationError>
where
    C: Scheduled + ?Sized,
    T: Scheduled + Named,
{
    match find_conflict(candidate, existing) {
        Some(conflict) => {
            tracing::debug!(conflicting_id = conflict.id(), "rejected overlapping activity");
            Err(ValidationError::Overlap {
                conflicting_id: conflict.id().to_string(),
                conflicting_name: conflict.name().to_string(),
                conflicting_time: conflict.time().format("%H:%M").to_string(),
            })
        }
        None => Ok(()),
    }
}
