//! Street/location extraction.

use super::patterns::{contains_any, STREET_INDICATORS};
use super::{window, ExtractionMatch, FieldExtractor};

/// Looks for a street indicator in fields 1-3, else takes field 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressExtractor;

impl FieldExtractor for AddressExtractor {
    type Output = String;

    fn field_name(&self) -> &'static str {
        "address"
    }

    fn extract(&self, fields: &[&str]) -> Option<ExtractionMatch<String>> {
        if let Some((idx, field)) =
            window(fields, 1, 4).find(|(_, f)| contains_any(&f.to_lowercase(), STREET_INDICATORS))
        {
            return Some(ExtractionMatch::pattern(field.to_string(), idx));
        }

        fields
            .get(1)
            .map(|field| ExtractionMatch::positional(field.to_string(), 1))
    }
}
