//! Heuristic line parser turning OCR spreadsheet rows into area records.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ExtractionError;
use crate::models::area::{AreaRecord, Coordinates};
use crate::models::config::ExtractionConfig;
use crate::text::{extract_data_lines, normalize};

use super::rules::{
    split_fields, AddressExtractor, AreaExtractor, CoordinateExtractor, DistrictExtractor,
    ExtractionMatch, FieldExtractor, ItemTypeExtractor, LotExtractor, NotesExtractor,
};

/// Counters and diagnostics of one processing run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessingSummary {
    /// Lines turned into records.
    pub accepted_count: usize,
    /// Candidate lines that were rejected.
    pub skipped_count: usize,
    /// Number of diagnostics collected.
    pub error_count: usize,
    /// One diagnostic per rejected line.
    pub errors: Vec<String>,
    /// Accepted share of candidate lines, two decimals.
    pub success_rate_percent: f64,
}

impl ProcessingSummary {
    fn from_counts(accepted_count: usize, errors: Vec<String>) -> Self {
        let skipped_count = errors.len();
        let total = (accepted_count + skipped_count).max(1) as f64;
        let rate = accepted_count as f64 / total * 100.0;

        Self {
            accepted_count,
            skipped_count,
            error_count: errors.len(),
            errors,
            success_rate_percent: (rate * 100.0).round() / 100.0,
        }
    }

    /// Number of candidate data lines seen.
    pub fn candidate_count(&self) -> usize {
        self.accepted_count + self.skipped_count
    }
}

/// Result of processing one OCR text.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Accepted records, in input order.
    pub records: Vec<AreaRecord>,
    /// Counters and diagnostics.
    pub summary: ProcessingSummary,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for area sheet parsing.
pub trait AreaParser {
    /// Parse every data line of raw OCR text.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Line-oriented heuristic parser.
///
/// Holds configuration only, so one instance can be shared between threads
/// and reused across texts.
#[derive(Debug, Clone, Default)]
pub struct HeuristicAreaParser {
    config: ExtractionConfig,
}

impl HeuristicAreaParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser from extraction configuration.
    pub fn with_config(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Set the minimum number of fields a line must split into.
    pub fn with_min_fields(mut self, min_fields: usize) -> Self {
        self.config.min_fields = min_fields;
        self
    }

    /// Normalize raw OCR text and parse each candidate line.
    pub fn process(&self, raw_text: &str) -> ExtractionResult {
        let start = Instant::now();
        let text = normalize(raw_text);

        let mut records = Vec::new();
        let mut errors = Vec::new();

        for (idx, line) in extract_data_lines(&text).enumerate() {
            let line_number = idx + 1;
            match self.parse_line(line, line_number) {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!("Line {}: {}", line_number, e);
                    errors.push(format!("line {}: {}", line_number, e));
                }
            }
        }

        let summary = ProcessingSummary::from_counts(records.len(), errors);
        info!(
            "Processed {} candidate lines: {} accepted, {} skipped",
            summary.candidate_count(),
            summary.accepted_count,
            summary.skipped_count
        );

        ExtractionResult {
            records,
            summary,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }

    /// Parse one candidate line into a record.
    pub fn parse_line(
        &self,
        line: &str,
        line_number: usize,
    ) -> Result<AreaRecord, ExtractionError> {
        let fields = split_fields(line, self.config.min_fields);
        if fields.len() < self.config.min_fields {
            return Err(ExtractionError::TooFewFields {
                found: fields.len(),
                required: self.config.min_fields,
            });
        }

        debug!("Line {} split into {} fields: {:?}", line_number, fields.len(), fields);

        let item_type = value_of(&ItemTypeExtractor, &fields).unwrap_or_default();
        let address = value_of(&AddressExtractor, &fields).unwrap_or_default();
        let district = value_of(&DistrictExtractor, &fields);
        let area_m2 = value_of(&AreaExtractor, &fields);
        let latitude = value_of(&CoordinateExtractor::latitude(), &fields);
        let longitude = value_of(&CoordinateExtractor::longitude(), &fields);
        let lot_number = value_of(&LotExtractor, &fields);
        let notes = value_of(&NotesExtractor, &fields);

        let missing: Vec<&str> = [("item_type", &item_type), ("address", &address)]
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| name)
            .collect();
        if !missing.is_empty() {
            return Err(ExtractionError::MissingField(missing.join(", ")));
        }

        Ok(AreaRecord {
            item_type,
            address,
            district: district.unwrap_or_else(|| self.config.default_district.clone()),
            area_m2: area_m2.unwrap_or(0.0),
            latitude,
            longitude,
            lot_number: lot_number.unwrap_or(self.config.default_lot),
            notes,
            coordinates: Coordinates::from_parts(latitude, longitude),
        })
    }
}

/// Run one extractor and keep only its value.
fn value_of<E: FieldExtractor>(extractor: &E, fields: &[&str]) -> Option<E::Output>
where
    E::Output: std::fmt::Debug,
{
    let found: Option<ExtractionMatch<E::Output>> = extractor.extract(fields);
    match &found {
        Some(m) => debug!("  {} = {:?} ({:?}, field {:?})", extractor.field_name(), m.value, m.kind, m.field),
        None => debug!("  {} not found", extractor.field_name()),
    }
    found.map(|m| m.value)
}

impl AreaParser for HeuristicAreaParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        self.process(text)
    }
}
