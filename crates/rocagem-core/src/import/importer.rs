//! Paced, duplicate-aware import of area records.

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::ImportError;
use crate::models::area::AreaRecord;
use crate::models::config::ImportConfig;

use super::log::{ImportLogEntry, ImportStatus};
use super::mapping::ServiceArea;

/// Remote tabular store holding service areas.
pub trait AreaStore: Send + Sync {
    /// Whether a row with this name already exists.
    fn exists_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<bool, ImportError>> + Send;

    /// Insert a row, returning the id the store assigned to it.
    fn insert(
        &self,
        area: &ServiceArea,
    ) -> impl Future<Output = Result<Option<String>, ImportError>> + Send;
}

/// Outcome counters of an import run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportResult {
    pub total: usize,
    pub success: usize,
    pub errors: usize,
    pub skipped: usize,
    pub error_details: Vec<String>,
    pub imported_ids: Vec<String>,
}

impl ImportResult {
    fn merge(&mut self, other: ImportResult) {
        self.success += other.success;
        self.errors += other.errors;
        self.skipped += other.skipped;
        self.error_details.extend(other.error_details);
        self.imported_ids.extend(other.imported_ids);
    }
}

/// Pushes records into an [`AreaStore`] in fixed-size sequential batches.
pub struct Importer<S> {
    store: S,
    batch_size: usize,
    batch_delay: Duration,
    log: Vec<ImportLogEntry>,
}

impl<S: AreaStore> Importer<S> {
    /// Create an importer with batches of 50 and a 500 ms pause.
    pub fn new(store: S) -> Self {
        Self::from_config(store, &ImportConfig::default())
    }

    /// Create an importer using batch settings from configuration.
    pub fn from_config(store: S, config: &ImportConfig) -> Self {
        Self {
            store,
            batch_size: config.batch_size.max(1),
            batch_delay: config.batch_delay(),
            log: Vec::new(),
        }
    }

    /// Set the number of records per batch.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Set the pause between batches.
    pub fn with_batch_delay(mut self, batch_delay: Duration) -> Self {
        self.batch_delay = batch_delay;
        self
    }

    /// Entries recorded for every attempt so far.
    pub fn log(&self) -> &[ImportLogEntry] {
        &self.log
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Import all records. Per-record failures are counted, never returned.
    pub async fn import(&mut self, records: &[AreaRecord]) -> ImportResult {
        let mut result = ImportResult {
            total: records.len(),
            ..Default::default()
        };

        let total_batches = records.len().div_ceil(self.batch_size);
        for (idx, batch) in records.chunks(self.batch_size).enumerate() {
            let batch_number = idx + 1;
            info!(
                "Importing batch {}/{} ({} areas)",
                batch_number,
                total_batches,
                batch.len()
            );

            let batch_result = self.import_batch(batch).await;
            result.merge(batch_result);

            if batch_number < total_batches && !self.batch_delay.is_zero() {
                tokio::time::sleep(self.batch_delay).await;
            }
        }

        info!(
            "Import finished: {} total, {} imported, {} errors, {} skipped",
            result.total, result.success, result.errors, result.skipped
        );

        result
    }

    async fn import_batch(&mut self, batch: &[AreaRecord]) -> ImportResult {
        let mut result = ImportResult {
            total: batch.len(),
            ..Default::default()
        };

        for record in batch {
            let area = ServiceArea::from(record);

            if self.is_duplicate(&area).await {
                result.skipped += 1;
                self.log
                    .push(ImportLogEntry::new(record, ImportStatus::Skipped, None, None));
                continue;
            }

            match self.store.insert(&area).await {
                Ok(Some(id)) => {
                    result.success += 1;
                    result.imported_ids.push(id.clone());
                    self.log.push(ImportLogEntry::new(
                        record,
                        ImportStatus::Success,
                        Some(id),
                        None,
                    ));
                }
                Ok(None) => self.record_error(&mut result, record, ImportError::InvalidResponse),
                Err(e) => self.record_error(&mut result, record, e),
            }
        }

        result
    }

    /// A failed lookup counts as "not a duplicate" so the insert is still tried.
    async fn is_duplicate(&self, area: &ServiceArea) -> bool {
        match self.store.exists_by_name(&area.name).await {
            Ok(exists) => exists,
            Err(e) => {
                warn!("Duplicate check failed for {:?}: {}", area.name, e);
                false
            }
        }
    }

    fn record_error(&mut self, result: &mut ImportResult, record: &AreaRecord, error: ImportError) {
        let message = format!("failed to import {:?}: {}", record.address, error);
        warn!("{}", message);

        result.errors += 1;
        result.error_details.push(message.clone());
        self.log.push(ImportLogEntry::new(
            record,
            ImportStatus::Error,
            None,
            Some(message),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryStore {
        rows: Mutex<Vec<ServiceArea>>,
        failing_addresses: HashSet<String>,
        empty_response_addresses: HashSet<String>,
        lookup_broken: bool,
    }

    impl AreaStore for MemoryStore {
        async fn exists_by_name(&self, name: &str) -> Result<bool, ImportError> {
            if self.lookup_broken {
                return Err(ImportError::Request("connection reset".to_string()));
            }
            Ok(self.rows.lock().unwrap().iter().any(|row| row.name == name))
        }

        async fn insert(&self, area: &ServiceArea) -> Result<Option<String>, ImportError> {
            let address = area.description.trim_start_matches("Área de roçagem: ");
            if self.failing_addresses.contains(address) {
                return Err(ImportError::Request("500 Internal Server Error".to_string()));
            }
            if self.empty_response_addresses.contains(address) {
                return Ok(None);
            }

            let mut rows = self.rows.lock().unwrap();
            rows.push(area.clone());
            Ok(Some(rows.len().to_string()))
        }
    }

    fn record(address: &str) -> AreaRecord {
        AreaRecord {
            item_type: "praça".to_string(),
            address: address.to_string(),
            district: "casoni".to_string(),
            area_m2: 500.0,
            latitude: None,
            longitude: None,
            lot_number: 1,
            notes: None,
            coordinates: None,
        }
    }

    #[tokio::test]
    async fn test_imports_and_skips_duplicates() {
        let mut importer = Importer::new(MemoryStore::default()).with_batch_delay(Duration::ZERO);
        let records = vec![record("rua a"), record("rua b"), record("rua a")];

        let result = importer.import(&records).await;

        assert_eq!(result.total, 3);
        assert_eq!(result.success, 2);
        assert_eq!(result.skipped, 1);
        assert_eq!(result.errors, 0);
        assert_eq!(result.imported_ids, vec!["1".to_string(), "2".to_string()]);
        assert_eq!(importer.store().rows.lock().unwrap().len(), 2);

        let statuses: Vec<_> = importer.log().iter().map(|e| e.status).collect();
        assert_eq!(
            statuses,
            vec![ImportStatus::Success, ImportStatus::Success, ImportStatus::Skipped]
        );
    }

    #[tokio::test]
    async fn test_failures_do_not_abort() {
        let store = MemoryStore {
            failing_addresses: HashSet::from(["rua b".to_string()]),
            empty_response_addresses: HashSet::from(["rua c".to_string()]),
            ..Default::default()
        };
        let mut importer = Importer::new(store).with_batch_delay(Duration::ZERO);
        let records = vec![record("rua a"), record("rua b"), record("rua c"), record("rua d")];

        let result = importer.import(&records).await;

        assert_eq!(result.success, 2);
        assert_eq!(result.errors, 2);
        assert!(result.error_details[0].contains("500 Internal Server Error"));
        assert!(result.error_details[1].contains("invalid response"));
        assert_eq!(importer.log().len(), 4);
    }

    #[tokio::test]
    async fn test_broken_lookup_still_inserts() {
        let store = MemoryStore {
            lookup_broken: true,
            ..Default::default()
        };
        let mut importer = Importer::new(store).with_batch_delay(Duration::ZERO);

        let result = importer.import(&[record("rua a"), record("rua a")]).await;
        assert_eq!(result.success, 2);
        assert_eq!(result.skipped, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pauses_between_batches_only() {
        let mut importer = Importer::new(MemoryStore::default())
            .with_batch_size(2)
            .with_batch_delay(Duration::from_millis(500));
        let records: Vec<_> = (0..5).map(|i| record(&format!("rua {}", i))).collect();

        let start = tokio::time::Instant::now();
        let result = importer.import(&records).await;

        assert_eq!(result.success, 5);
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(1000), "{:?}", elapsed);
        assert!(elapsed < Duration::from_millis(1500), "{:?}", elapsed);
    }

    #[tokio::test]
    async fn test_empty_input() {
        let mut importer = Importer::new(MemoryStore::default());
        let result = importer.import(&[]).await;
        assert_eq!(result, ImportResult::default());
    }
}
