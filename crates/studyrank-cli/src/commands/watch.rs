//! Periodic rescoring loop.
//!
//! Each tick reloads the activity file, rescores against the current instant
//! and prints the top of the ranked list. Ticks never overlap: the next one is
//! scheduled only after the previous finished.

use std::time::Duration;

use clap::Args;
use studyrank_core::Config;

use super::{local_now, open_board};

#[derive(Args)]
pub struct WatchArgs {
    /// Seconds between refreshes (defaults to refresh.interval_secs)
    #[arg(long)]
    interval: Option<u64>,
    /// Stop after this many refreshes
    #[arg(long)]
    ticks: Option<u64>,
    /// Number of activities printed per refresh
    #[arg(long, default_value_t = 5)]
    top: usize,
}

pub fn run(args: WatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let interval_secs = args.interval.unwrap_or(config.refresh.interval_secs).max(1);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        let mut done = 0u64;
        loop {
            interval.tick().await;
            let now = local_now();
            let (_, board) = open_board(now)?;
            tracing::info!(%now, count = board.len(), "refresh tick");

            println!("== {} ==", now.format("%Y-%m-%d %H:%M:%S"));
            for item in board.ranked().iter().take(args.top) {
                println!(
                    "{:>7.1}  {}{}",
                    item.priority_score,
                    item.activity.name,
                    if item.is_overdue { " (overdue)" } else { "" }
                );
            }

            done += 1;
            if args.ticks.is_some_and(|limit| done >= limit) {
                break;
            }
        }
        Ok::<(), Box<dyn std::error::Error>>(())
    })
}
