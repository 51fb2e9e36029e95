//! Surface (square meters) extraction.

use tracing::trace;

use super::patterns::{parse_br_decimal, BR_DECIMAL};
use super::{ExtractionMatch, FieldExtractor};

/// Lower bound (exclusive) of a plausible surface.
pub const MIN_AREA_M2: f64 = 1.0;

/// Upper bound (inclusive) of a plausible surface.
pub const MAX_AREA_M2: f64 = 100_000.0;

/// First Brazilian decimal on the line within (1, 100000] m².
#[derive(Debug, Clone, Copy, Default)]
pub struct AreaExtractor;

impl FieldExtractor for AreaExtractor {
    type Output = f64;

    fn field_name(&self) -> &'static str {
        "area_m2"
    }

    fn extract(&self, fields: &[&str]) -> Option<ExtractionMatch<f64>> {
        for (idx, field) in fields.iter().enumerate() {
            for m in BR_DECIMAL.find_iter(field) {
                match parse_br_decimal(m.as_str()) {
                    Some(value) if value > MIN_AREA_M2 && value <= MAX_AREA_M2 => {
                        return Some(ExtractionMatch::pattern(value, idx));
                    }
                    _ => trace!("Rejected area candidate {:?}", m.as_str()),
                }
            }
        }

        None
    }
}
