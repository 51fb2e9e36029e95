//! Configuration structures for the extraction and import pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::area::UNSPECIFIED_DISTRICT;
use crate::area::rules::lot::LOT_RANGE;
use crate::error::RocagemError;

/// Main configuration for the rocagem pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RocagemConfig {
    /// Line extraction configuration.
    pub extraction: ExtractionConfig,

    /// Remote store import configuration.
    pub import: ImportConfig,
}

/// Line parsing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Minimum number of fields a line must split into.
    pub min_fields: usize,

    /// District used when none is found on a line.
    pub default_district: String,

    /// Lot number used when none is found on a line.
    pub default_lot: u16,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            min_fields: 5,
            default_district: UNSPECIFIED_DISTRICT.to_string(),
            default_lot: 1,
        }
    }
}

/// Remote store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Base URL of the PostgREST/Supabase project.
    pub url: String,

    /// Target table name.
    pub table: String,

    /// Records per batch.
    pub batch_size: usize,

    /// Pause between batches in milliseconds.
    pub batch_delay_ms: u64,

    /// Where the JSON import log is written.
    pub log_path: PathBuf,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:54321".to_string(),
            table: "service_areas".to_string(),
            batch_size: 50,
            batch_delay_ms: 500,
            log_path: PathBuf::from("import_log.json"),
        }
    }
}

impl ImportConfig {
    /// Pause between two consecutive batches.
    pub fn batch_delay(&self) -> Duration {
        Duration::from_millis(self.batch_delay_ms)
    }
}

impl RocagemConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Reject values the parser or importer cannot work with.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.extraction.min_fields == 0 {
            return Err(RocagemError::Config(
                "extraction.min_fields must be at least 1".to_string(),
            ));
        }
        if !LOT_RANGE.contains(&self.extraction.default_lot) {
            return Err(RocagemError::Config(format!(
                "extraction.default_lot must be within {}-{}",
                LOT_RANGE.start(),
                LOT_RANGE.end()
            )));
        }
        if self.import.batch_size == 0 {
            return Err(RocagemError::Config(
                "import.batch_size must be at least 1".to_string(),
            ));
        }
        if self.import.table.trim().is_empty() {
            return Err(RocagemError::Config("import.table must not be empty".to_string()));
        }
        Ok(())
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}
