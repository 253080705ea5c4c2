pub mod activity;
pub mod advise;
pub mod chart;
pub mod config;
pub mod demo;
pub mod watch;

use chrono::{Local, NaiveDateTime};
use studyrank_core::{ActivityBoard, ActivityStore};

/// Current local wall-clock instant, the only place the CLI reads the clock.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Open the activity file and score its contents against `now`.
pub fn open_board(now: NaiveDateTime) -> Result<(ActivityStore, ActivityBoard), Box<dyn std::error::Error>> {
    let store = ActivityStore::open()?;
    let board = store.load_board(now)?;
    Ok((store, board))
}
