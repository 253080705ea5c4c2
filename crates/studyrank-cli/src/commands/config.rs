//! Settings for refresh cadence, list filtering and the schedule advisor.

use clap::Subcommand;
use serde_json::Value;
use studyrank_core::{Config, ConfigError};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print one setting
    Get {
        /// Dot-separated key (e.g. "refresh.interval_secs", "advisor.model")
        key: String,
    },
    /// Change one setting and save it
    Set {
        /// Dot-separated key
        key: String,
        /// New value
        value: String,
    },
    /// Show every setting as `section.key = value`
    List {
        /// Print JSON instead
        #[arg(long)]
        json: bool,
    },
    /// Restore refresh, list and advisor defaults
    Reset,
    /// Print the config file location
    Path,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let value = Config::load()?
                .get(&key)
                .ok_or(ConfigError::UnknownKey(key))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            let stored = config.get(&key).unwrap_or(value);
            println!("{key} = {stored}");
        }
        ConfigAction::List { json } => {
            let tree = serde_json::to_value(Config::load()?)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&tree)?);
            } else {
                for line in flatten("", &tree) {
                    println!("{line}");
                }
            }
        }
        ConfigAction::Reset => {
            Config::default().save()?;
            println!("Defaults restored in {}", Config::path()?.display());
        }
        ConfigAction::Path => {
            println!("{}", Config::path()?.display());
        }
    }
    Ok(())
}

/// `section.key = value` lines, sorted by key.
fn flatten(prefix: &str, value: &Value) -> Vec<String> {
    match value {
        Value::Object(map) => map
            .iter()
            .flat_map(|(key, child)| {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&path, child)
            })
            .collect(),
        Value::String(s) => vec![format!("{prefix} = {s}")],
        other => vec![format!("{prefix} = {other}")],
    }
}
