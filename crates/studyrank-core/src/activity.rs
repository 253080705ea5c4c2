//! Activity types: the stored record, the form-side draft, and the scored view.
//!
//! Dates and times are local wall-clock values with no offset attached.
//! Dates serialize as `YYYY-MM-DD`, times as `HH:MM`.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of activity. Determines the urgency weight and the importance range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityType {
    Final,
    Midterm,
    Workshop,
    Club,
    Personal,
    Other,
}

/// Allowed `base_score` range for one activity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportanceRange {
    pub min: i32,
    pub max: i32,
    pub default: i32,
    pub label: &'static str,
}

impl ImportanceRange {
    pub fn contains(&self, score: i32) -> bool {
        (self.min..=self.max).contains(&score)
    }
}

impl ActivityType {
    pub const ALL: [ActivityType; 6] = [
        ActivityType::Final,
        ActivityType::Midterm,
        ActivityType::Workshop,
        ActivityType::Club,
        ActivityType::Personal,
        ActivityType::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Final => "Final",
            Self::Midterm => "Midterm",
            Self::Workshop => "Workshop",
            Self::Club => "Club",
            Self::Personal => "Personal",
            Self::Other => "Other",
        }
    }

    /// Importance range offered by the input form for this type.
    pub fn importance_range(self) -> ImportanceRange {
        match self {
            Self::Final => ImportanceRange {
                min: 8,
                max: 10,
                default: 10,
                label: "Critical (8-10)",
            },
            Self::Midterm => ImportanceRange {
                min: 6,
                max: 9,
                default: 8,
                label: "High (6-9)",
            },
            Self::Workshop => ImportanceRange {
                min: 3,
                max: 7,
                default: 5,
                label: "Medium (3-7)",
            },
            Self::Club | Self::Personal | Self::Other => ImportanceRange {
                min: 1,
                max: 10,
                default: 5,
                label: "Flexible (1-10)",
            },
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("unknown activity type '{s}' (expected one of: final, midterm, workshop, club, personal, other)")
            })
    }
}

/// Anything occupying a `[start, start + duration)` slot on a single date.
pub trait Scheduled {
    fn date(&self) -> NaiveDate;
    fn time(&self) -> NaiveTime;
    fn duration_minutes(&self) -> u32;

    fn start(&self) -> NaiveDateTime {
        self.date().and_time(self.time())
    }

    fn end(&self) -> NaiveDateTime {
        self.start() + Duration::minutes(i64::from(self.duration_minutes()))
    }
}

/// Activity as submitted by the form layer, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewActivity {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    pub duration_minutes: u32,
    pub base_score: i32,
}

impl NewActivity {
    /// Assign a fresh UUID and turn the draft into a stored record.
    pub fn into_activity(self) -> Activity {
        self.with_id(Uuid::new_v4().to_string())
    }

    pub fn with_id(self, id: impl Into<String>) -> Activity {
        Activity {
            id: id.into(),
            name: self.name,
            kind: self.kind,
            date: self.date,
            time: self.time,
            duration_minutes: self.duration_minutes,
            base_score: self.base_score,
        }
    }
}

/// Stored activity record. This is the only shape that gets persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    pub duration_minutes: u32,
    pub base_score: i32,
}

/// Activity plus the fields derived from it at a given instant.
///
/// The derived fields go stale as soon as the clock moves; rebuild them with
/// [`crate::calculate_priority`] rather than trusting a stored copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrioritizedActivity {
    #[serde(flatten)]
    pub activity: Activity,
    pub priority_score: f64,
    pub is_overdue: bool,
    pub is_today: bool,
}

impl PrioritizedActivity {
    pub fn id(&self) -> &str {
        &self.activity.id
    }

    pub fn into_activity(self) -> Activity {
        self.activity
    }
}

impl Scheduled for NewActivity {
    fn date(&self) -> NaiveDate {
        self.date
    }
    fn time(&self) -> NaiveTime {
        self.time
    }
    fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }
}

impl Scheduled for Activity {
    fn date(&self) -> NaiveDate {
        self.date
    }
    fn time(&self) -> NaiveTime {
        self.time
    }
    fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }
}

impl Scheduled for PrioritizedActivity {
    fn date(&self) -> NaiveDate {
        self.activity.date
    }
    fn time(&self) -> NaiveTime {
        self.activity.time
    }
    fn duration_minutes(&self) -> u32 {
        self.activity.duration_minutes
    }
}

/// Durations offered by the form: 15 minutes to 6 hours in 15 minute steps.
pub fn duration_options() -> Vec<u32> {
    (1..=24).map(|step| step * 15).collect()
}

/// Default duration preselected by the form.
pub const DEFAULT_DURATION_MINUTES: u32 = 60;

/// Render a duration as `45 min`, `1 hr`, `2 hrs 30 min`.
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    let unit = if hours > 1 { "hrs" } else { "hr" };
    match (hours, rest) {
        (0, m) => format!("{m} min"),
        (h, 0) => format!("{h} {unit}"),
        (h, m) => format!("{h} {unit} {m} min"),
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
}

/// Parse an `HH:MM` wall-clock time. A trailing `:SS` is tolerated.
pub fn parse_time(raw: &str) -> Result<NaiveTime, chrono::ParseError> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M").or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
}

pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_time(&raw).map_err(serde::de::Error::custom)
    }
}
