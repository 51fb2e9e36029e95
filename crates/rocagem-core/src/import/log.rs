//! JSON log of import attempts.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::models::area::AreaRecord;

/// Outcome of one import attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportStatus {
    Success,
    Skipped,
    Error,
}

/// One line of the import log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportLogEntry {
    pub timestamp: DateTime<Utc>,
    pub address: String,
    pub district: String,
    pub item_type: String,
    pub area_m2: f64,
    pub remote_id: Option<String>,
    pub status: ImportStatus,
    pub error: Option<String>,
}

impl ImportLogEntry {
    pub fn new(
        record: &AreaRecord,
        status: ImportStatus,
        remote_id: Option<String>,
        error: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            address: record.address.clone(),
            district: record.district.clone(),
            item_type: record.item_type.clone(),
            area_m2: record.area_m2,
            remote_id,
            status,
            error,
        }
    }
}

/// Append entries to the JSON array stored at `path`, creating it if needed.
pub fn append_log(path: &Path, entries: &[ImportLogEntry]) -> Result<()> {
    let mut all: Vec<ImportLogEntry> = if path.exists() {
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            Vec::new()
        } else {
            serde_json::from_str(&content)?
        }
    } else {
        Vec::new()
    };

    all.extend_from_slice(entries);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(&all)?)?;

    debug!("Wrote {} log entries to {}", all.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> AreaRecord {
        AreaRecord {
            item_type: "viela".to_string(),
            address: "jorge casoni".to_string(),
            district: "casoni".to_string(),
            area_m2: 908.8,
            latitude: None,
            longitude: None,
            lot_number: 1,
            notes: None,
            coordinates: None,
        }
    }

    #[test]
    fn test_append_keeps_previous_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("import_log.json");

        let first = ImportLogEntry::new(&record(), ImportStatus::Success, Some("1".to_string()), None);
        append_log(&path, &[first]).unwrap();

        let second = ImportLogEntry::new(
            &record(),
            ImportStatus::Error,
            None,
            Some("request failed: timeout".to_string()),
        );
        append_log(&path, &[second]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let entries: Vec<ImportLogEntry> = serde_json::from_str(&content).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].remote_id.as_deref(), Some("1"));
        assert_eq!(entries[1].status, ImportStatus::Error);
        assert!(content.contains("\"status\": \"error\""));
    }

    #[test]
    fn test_corrupt_log_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("import_log.json");
        fs::write(&path, "not json").unwrap();

        assert!(append_log(&path, &[]).is_err());
    }
}
