//! Core library for mowing-area spreadsheet OCR processing.
//!
//! This crate provides:
//! - OCR text cleanup and data-line selection
//! - Heuristic field extraction into area records (type, address, district,
//!   surface, coordinates, lot, notes)
//! - Mapping to service areas and paced, duplicate-aware import into a remote store

pub mod area;
pub mod error;
pub mod import;
pub mod models;
pub mod text;

pub use area::{AreaParser, ExtractionResult, HeuristicAreaParser, ProcessingSummary};
pub use error::{ExtractionError, ImportError, Result, RocagemError};
pub use import::{AreaStore, ImportLogEntry, ImportResult, Importer, ServiceArea};
pub use models::area::{AreaRecord, Coordinates};
pub use models::config::RocagemConfig;
pub use text::{extract_data_lines, normalize};
