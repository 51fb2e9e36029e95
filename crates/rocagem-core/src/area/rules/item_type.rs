//! Area category extraction.

use super::patterns::{contains_any, ITEM_TYPES};
use super::{window, ExtractionMatch, FieldExtractor};

/// Category used when a line has no fields at all.
pub const DEFAULT_ITEM_TYPE: &str = "area publica";

/// Looks for a known category in the first three fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemTypeExtractor;

impl FieldExtractor for ItemTypeExtractor {
    type Output = String;

    fn field_name(&self) -> &'static str {
        "item_type"
    }

    fn extract(&self, fields: &[&str]) -> Option<ExtractionMatch<String>> {
        if let Some((idx, field)) =
            window(fields, 0, 3).find(|(_, f)| contains_any(&f.to_lowercase(), ITEM_TYPES))
        {
            return Some(ExtractionMatch::pattern(field.to_string(), idx));
        }

        Some(match fields.first() {
            Some(first) => ExtractionMatch::positional(first.to_string(), 0),
            None => ExtractionMatch::default_value(DEFAULT_ITEM_TYPE.to_string()),
        })
    }
}
