//! OCR text cleanup and data-line selection.

pub mod lines;
pub mod normalize;

pub use lines::{extract_data_lines, is_data_line, is_header_line, DataLines};
pub use normalize::normalize;
