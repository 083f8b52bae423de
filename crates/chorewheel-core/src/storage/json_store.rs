//! JSON persistence for the household document.
//!
//! The document lives at `~/.config/chorewheel/household.json`. Saving goes
//! through a temporary sibling file that is renamed into place, so a failed
//! write leaves the previous document intact.

use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::{Result, StoreError};
use crate::model::{Household, SCHEMA_VERSION};

const HOUSEHOLD_FILE: &str = "household.json";

/// File-backed household store.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the default data directory.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(data_dir()?.join(HOUSEHOLD_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document. A missing file yields an empty household.
    pub fn load(&self) -> Result<Household, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no household file yet");
                return Ok(Household::default());
            }
            Err(source) => {
                return Err(StoreError::ReadFailed {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let household: Household =
            serde_json::from_str(&content).map_err(|source| StoreError::ParseFailed {
                path: self.path.clone(),
                source,
            })?;

        if household.meta.schema_version > SCHEMA_VERSION {
            return Err(StoreError::UnsupportedSchema {
                found: household.meta.schema_version,
                supported: SCHEMA_VERSION,
            });
        }

        tracing::debug!(
            path = %self.path.display(),
            days = household.assignments_by_date.len(),
            "household loaded"
        );
        Ok(household)
    }

    /// Write the document, replacing the previous file atomically.
    pub fn save(&self, household: &Household) -> Result<(), StoreError> {
        let write_failed = |source: std::io::Error| StoreError::WriteFailed {
            path: self.path.clone(),
            source,
        };

        let mut document = household.clone();
        document.meta.schema_version = SCHEMA_VERSION;
        let content = serde_json::to_string_pretty(&document)
            .map_err(|e| write_failed(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_failed)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content).map_err(write_failed)?;
        std::fs::rename(&tmp, &self.path).map_err(write_failed)?;

        tracing::debug!(path = %self.path.display(), "household saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day_store::DayStore;
    use crate::model::DayRecord;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_empty_household() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().join("household.json"));
        assert_eq!(store.load().unwrap(), Household::default());
    }

    #[test]
    fn save_then_load_preserves_document() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().join("nested").join("household.json"));

        let mut household = Household::new();
        let ana = household.add_person("Ana").unwrap();
        let dishes = household.add_chore("Dishes").unwrap();
        let mut record = DayRecord::with_available([ana.clone()].into_iter().collect());
        record.assignments.insert(dishes, ana);
        household.set(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), record);

        store.save(&household).unwrap();
        assert_eq!(store.load().unwrap(), household);
        assert!(!store.path().with_extension("json.tmp").exists());

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        assert!(raw["assignmentsByDate"]["2024-01-02"]["availablePersonIds"].is_array());
        assert_eq!(raw["meta"]["schemaVersion"], 1);
    }

    #[test]
    fn corrupt_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("household.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            JsonStore::new(&path).load(),
            Err(StoreError::ParseFailed { .. })
        ));
    }

    #[test]
    fn newer_schema_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("household.json");
        std::fs::write(&path, r#"{"meta": {"schemaVersion": 99}}"#).unwrap();
        assert!(matches!(
            JsonStore::new(&path).load(),
            Err(StoreError::UnsupportedSchema { found: 99, .. })
        ));
    }

    #[test]
    fn failed_write_keeps_previous_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("household.json");
        let store = JsonStore::new(&path);
        store.save(&Household::new()).unwrap();

        // A directory squatting on the temp path makes the write fail.
        std::fs::create_dir(path.with_extension("json.tmp")).unwrap();
        let mut household = Household::new();
        household.add_person("Ana").unwrap();
        assert!(matches!(store.save(&household), Err(StoreError::WriteFailed { .. })));
        assert_eq!(store.load().unwrap(), Household::new());
    }
}
