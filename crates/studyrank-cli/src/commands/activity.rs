//! Activity management commands for CLI.

use clap::Subcommand;
use studyrank_core::activity::format_duration;
use studyrank_core::{ActivityFilter, ActivityForm, ActivityType, Config, PrioritizedActivity};

use super::{local_now, open_board};

#[derive(Subcommand)]
pub enum ActivityAction {
    /// Add a new activity
    Add {
        /// Activity name
        name: String,
        /// Activity type: final, midterm, workshop, club, personal, other
        #[arg(long = "type", default_value = "other")]
        kind: ActivityType,
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Start time (HH:MM)
        #[arg(long)]
        time: String,
        /// Duration in minutes (form offers 15..=360 in steps of 15)
        #[arg(long, default_value_t = studyrank_core::activity::DEFAULT_DURATION_MINUTES)]
        duration: u32,
        /// Importance; defaults to the type's default (Final 10, Midterm 8, others 5)
        #[arg(long)]
        score: Option<i32>,
    },
    /// List activities by priority
    List {
        /// Filter: all, today or high
        #[arg(long, default_value = "all")]
        filter: ActivityFilter,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove an activity
    Remove {
        /// Activity ID
        id: String,
    },
    /// Rescore every activity now and print the ranked list as JSON
    Refresh,
    /// Show importance ranges for each type
    Types,
}

pub fn run(action: ActivityAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ActivityAction::Add {
            name,
            kind,
            date,
            time,
            duration,
            score,
        } => {
            let now = local_now();
            let (store, mut board) = open_board(now)?;
            let form = ActivityForm {
                name: Some(name),
                kind,
                date: Some(date),
                time: Some(time),
                duration_minutes: duration,
                base_score: score,
            };
            let added = board.add(form.parse()?, now)?;
            store.save_board(&board)?;
            println!("Activity added: {}", added.id());
            println!("{}", serde_json::to_string_pretty(&added)?);
        }
        ActivityAction::List { filter, json } => {
            let config = Config::load_or_default();
            let (_, board) = open_board(local_now())?;
            let shown = board.filtered(filter, config.list.high_priority_threshold);
            if json {
                println!("{}", serde_json::to_string_pretty(&shown)?);
            } else if shown.is_empty() {
                println!("No activities ({filter}).");
            } else {
                for activity in shown {
                    println!("{}", render_row(activity));
                }
            }
        }
        ActivityAction::Remove { id } => {
            let (store, mut board) = open_board(local_now())?;
            let removed = board
                .remove(&id)
                .ok_or_else(|| format!("Activity not found: {id}"))?;
            store.save_board(&board)?;
            println!("Activity removed: {} ({})", removed.id, removed.name);
        }
        ActivityAction::Refresh => {
            let (_, board) = open_board(local_now())?;
            println!("{}", serde_json::to_string_pretty(board.ranked())?);
        }
        ActivityAction::Types => {
            for kind in ActivityType::ALL {
                let range = kind.importance_range();
                println!("{:<9} {} default {}", kind.as_str(), range.label, range.default);
            }
        }
    }
    Ok(())
}

fn render_row(item: &PrioritizedActivity) -> String {
    let a = &item.activity;
    let mut flags = Vec::new();
    if item.is_overdue {
        flags.push("overdue");
    }
    if item.is_today {
        flags.push("today");
    }
    let flags = if flags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", flags.join(", "))
    };

    format!(
        "{:>7.1}  {} {}  {:<24} {:<9} {}  {}{}",
        item.priority_score,
        a.date.format("%Y-%m-%d"),
        a.time.format("%H:%M"),
        a.name,
        a.kind.as_str(),
        format_duration(a.duration_minutes),
        a.id,
        flags
    )
}
