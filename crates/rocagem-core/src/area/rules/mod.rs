//! Rule-based field extractors for spreadsheet rows.
//!
//! Each extractor scans a fixed window of the split fields and returns the
//! first match, a positional fallback, or nothing.

pub mod address;
pub mod area;
pub mod coordinates;
pub mod district;
pub mod item_type;
pub mod lot;
pub mod notes;
pub mod patterns;
pub mod split;

pub use address::AddressExtractor;
pub use area::{AreaExtractor, MAX_AREA_M2, MIN_AREA_M2};
pub use coordinates::CoordinateExtractor;
pub use district::DistrictExtractor;
pub use item_type::{ItemTypeExtractor, DEFAULT_ITEM_TYPE};
pub use lot::LotExtractor;
pub use notes::NotesExtractor;
pub use split::{split_before_numbers, split_fields, split_on_gaps};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Field name used in logs and diagnostics.
    fn field_name(&self) -> &'static str;

    /// Extract the field from the split fields of one line.
    fn extract(&self, fields: &[&str]) -> Option<ExtractionMatch<Self::Output>>;
}

/// How an extracted value was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// A vocabulary or pattern matched.
    Pattern,
    /// Taken verbatim from its usual column.
    Positional,
    /// Nothing on the line; a fixed default was used.
    Default,
}

/// Extracted value with its origin.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// How the value was found.
    pub kind: MatchKind,
    /// Index of the field it came from.
    pub field: Option<usize>,
}

impl<T> ExtractionMatch<T> {
    pub fn pattern(value: T, field: usize) -> Self {
        Self {
            value,
            kind: MatchKind::Pattern,
            field: Some(field),
        }
    }

    pub fn positional(value: T, field: usize) -> Self {
        Self {
            value,
            kind: MatchKind::Positional,
            field: Some(field),
        }
    }

    pub fn default_value(value: T) -> Self {
        Self {
            value,
            kind: MatchKind::Default,
            field: None,
        }
    }
}

/// Fields `start..end` with their indices, clamped to what the line has.
pub(crate) fn window<'a>(
    fields: &'a [&'a str],
    start: usize,
    end: usize,
) -> impl Iterator<Item = (usize, &'a str)> + 'a {
    fields
        .iter()
        .copied()
        .enumerate()
        .skip(start)
        .take(end.saturating_sub(start))
}

/// A free-text field: not a bare number and longer than two characters.
pub(crate) fn is_text_field(field: &str) -> bool {
    !patterns::is_numeric_token(field) && field.chars().count() > 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_clamps() {
        let fields = ["a", "b", "c"];
        let picked: Vec<_> = window(&fields, 1, 4).collect();
        assert_eq!(picked, vec![(1, "b"), (2, "c")]);
        assert_eq!(window(&fields, 5, 8).count(), 0);
    }

    #[test]
    fn test_is_text_field() {
        assert!(is_text_field("kase"));
        assert!(!is_text_field("c/"));
        assert!(!is_text_field("2.332,83"));
        assert!(!is_text_field(""));
    }
}
