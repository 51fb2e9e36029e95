//! Area record extraction from OCR spreadsheet text.

mod parser;
pub mod rules;

pub use parser::{AreaParser, ExtractionResult, HeuristicAreaParser, ProcessingSummary};
