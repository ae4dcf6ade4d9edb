//! File-backed storage for the staff book.

use super::JsonRoster;
use crate::error::{StorageError, StorageResult};
use crate::models::Roster;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Reads and writes a [`Roster`] as a pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonRosterStorage {
    path: PathBuf,
}

impl JsonRosterStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the roster.
    ///
    /// Returns `Ok(None)` if the file does not exist yet.
    pub fn read(&self) -> StorageResult<Option<Roster>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No data file at {}", self.path.display());
                return Ok(None);
            }
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let document: JsonRoster = serde_json::from_str(&text)?;
        let roster = document.to_model()?;
        info!(
            "Loaded {} person(s) from {}",
            roster.len(),
            self.path.display()
        );
        Ok(Some(roster))
    }

    /// Write the roster, creating parent directories as needed.
    pub fn save(&self, roster: &Roster) -> StorageResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let text = serde_json::to_string_pretty(&JsonRoster::from_model(roster))?;
        fs::write(&self.path, text).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(
            "Saved {} person(s) to {}",
            roster.len(),
            self.path.display()
        );
        Ok(())
    }
}
