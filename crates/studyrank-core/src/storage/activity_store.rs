//! Activity list persistence.
//!
//! The whole collection is a single JSON array at
//! `~/.config/studyrank/activities.json`. Only stored fields are written;
//! derived fields found in an older file are ignored on load.

use std::path::{Path, PathBuf};

use super::data_dir;
use chrono::NaiveDateTime;

use crate::activity::Activity;
use crate::board::ActivityBoard;
use crate::error::{Result, StoreError};

/// JSON file holding the user's activities.
#[derive(Debug, Clone)]
pub struct ActivityStore {
    path: PathBuf,
}

impl ActivityStore {
    /// Open the store in the data directory.
    pub fn open() -> Result<Self> {
        let path = data_dir()?.join("activities.json");
        Ok(Self { path })
    }

    /// Store backed by an explicit file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every stored activity. A missing or blank file is an empty list.
    pub fn load_all(&self) -> Result<Vec<Activity>, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::ReadFailed {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let activities: Vec<Activity> =
            serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
                path: self.path.clone(),
                source,
            })?;
        tracing::info!(count = activities.len(), path = %self.path.display(), "loaded activities");
        Ok(activities)
    }

    /// Replace the stored collection.
    pub fn save_all(&self, activities: &[Activity]) -> Result<(), StoreError> {
        let write_failed = |source| StoreError::WriteFailed {
            path: self.path.clone(),
            source,
        };

        // Vec<Activity> has string keys and no maps, so this cannot fail.
        let content = serde_json::to_string_pretty(activities)
            .map_err(|e| write_failed(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content).map_err(write_failed)?;
        std::fs::rename(&tmp, &self.path).map_err(write_failed)?;

        tracing::info!(count = activities.len(), path = %self.path.display(), "saved activities");
        Ok(())
    }

    /// Load the stored list and score it against `now`.
    pub fn load_board(&self, now: NaiveDateTime) -> Result<ActivityBoard> {
        Ok(ActivityBoard::load(self.load_all()?, now))
    }

    /// Persist the board's stored fields.
    pub fn save_board(&self, board: &ActivityBoard) -> Result<()> {
        self.save_all(&board.activities())?;
        Ok(())
    }
}
