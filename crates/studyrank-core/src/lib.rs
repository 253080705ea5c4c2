//! # studyrank Core Library
//!
//! Business logic for studyrank, a personal activity prioritizer. Users enter
//! time-boxed activities (exams, workshops, personal items) with an importance
//! score; the library ranks them by a priority that rises as each deadline
//! approaches and refuses bookings that collide on the same day.
//!
//! ## Architecture
//!
//! - **Priority**: a pure scoring function over (type, importance, time to
//!   start). The current instant is always passed in, so the caller owns the
//!   periodic refresh.
//! - **Overlap**: half-open interval intersection over same-date bookings
//! - **Ranking**: stable descending sort, list filters, per-day workload
//! - **Storage**: JSON activity list and TOML configuration
//! - **Advisor**: optional remote schedule analysis with deterministic fallbacks
//!
//! ## Key Components
//!
//! - [`calculate_priority`] / [`PriorityCalculator`]: derived field computation
//! - [`check_overlap`]: booking conflict test
//! - [`sort_activities`] / [`aggregate_load`]: list order and chart data
//! - [`ActivityBoard`]: ranked collection applying the add/remove/refresh pipeline
//! - [`ActivityStore`] / [`Config`]: persistence

pub mod activity;
pub mod advisor;
pub mod board;
pub mod demo;
pub mod error;
pub mod overlap;
pub mod priority;
pub mod ranking;
pub mod storage;
pub mod validation;

pub use activity::{Activity, ActivityType, ImportanceRange, NewActivity, PrioritizedActivity, Scheduled};
pub use advisor::{AnalysisResult, BurnoutRisk, ScheduleAdvisor};
pub use board::ActivityBoard;
pub use error::{ConfigError, CoreError, StoreError, ValidationError};
pub use overlap::{check_overlap, find_conflict};
pub use priority::{calculate_priority, PriorityCalculator};
pub use ranking::{aggregate_load, sort_activities, ActivityFilter, ChartPoint};
pub use storage::{ActivityStore, Config};
pub use validation::ActivityForm;
