//! Lot number extraction.

use super::{ExtractionMatch, FieldExtractor};

/// Lot numbers outside this range are treated as not found.
pub const LOT_RANGE: std::ops::RangeInclusive<u16> = 1..=999;

/// Punctuation OCR leaves glued to a standalone number ("(2", "7)", "5,").
const EDGE_PUNCTUATION: &[char] = &[
    '(', ')', '[', ']', '{', '}', ':', ';', ',', '.', '!', '?', '"', '\'',
];

/// First standalone integer on the line within 1-999.
///
/// A token counts once its edge punctuation is stripped and only digits remain.
/// Digits that belong to a decimal or coordinate token ("2.332,83",
/// "-23,3043262") are not candidates.
#[derive(Debug, Clone, Copy, Default)]
pub struct LotExtractor;

impl FieldExtractor for LotExtractor {
    type Output = u16;

    fn field_name(&self) -> &'static str {
        "lot_number"
    }

    fn extract(&self, fields: &[&str]) -> Option<ExtractionMatch<u16>> {
        fields.iter().enumerate().find_map(|(idx, field)| {
            field
                .split_whitespace()
                .filter_map(standalone_integer)
                .find(|value| LOT_RANGE.contains(value))
                .map(|value| ExtractionMatch::pattern(value, idx))
        })
    }
}

fn standalone_integer(token: &str) -> Option<u16> {
    let digits = token.trim_matches(EDGE_PUNCTUATION);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
