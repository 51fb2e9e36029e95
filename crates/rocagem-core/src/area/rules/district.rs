//! Neighborhood extraction.

use super::patterns::{contains_any, KNOWN_DISTRICTS};
use super::{is_text_field, window, ExtractionMatch, FieldExtractor};

/// Looks for a known neighborhood in fields 2-4, else the first text field there.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistrictExtractor;

impl FieldExtractor for DistrictExtractor {
    type Output = String;

    fn field_name(&self) -> &'static str {
        "district"
    }

    fn extract(&self, fields: &[&str]) -> Option<ExtractionMatch<String>> {
        if let Some((idx, field)) =
            window(fields, 2, 5).find(|(_, f)| contains_any(&f.to_lowercase(), KNOWN_DISTRICTS))
        {
            return Some(ExtractionMatch::pattern(field.to_string(), idx));
        }

        window(fields, 2, 5)
            .find(|(_, f)| is_text_field(f))
            .map(|(idx, field)| ExtractionMatch::positional(field.to_string(), idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::rules::MatchKind;

    #[test]
    fn test_known_district() {
        let fields = ["praça", "rua x", "jardim", "Santa Monica", "1"];
        let found = DistrictExtractor.extract(&fields).unwrap();
        assert_eq!(found.value, "Santa Monica");
        assert_eq!(found.kind, MatchKind::Pattern);
    }

    #[test]
    fn test_first_text_field() {
        let fields = ["praça", "rua x", "2.332,83", "jardim", "1"];
        let found = DistrictExtractor.extract(&fields).unwrap();
        assert_eq!(found.value, "jardim");
        assert_eq!(found.kind, MatchKind::Positional);
    }

    #[test]
    fn test_only_numbers_in_window() {
        let fields = ["praça", "rua x", "2.332,83", "-23,3043262", "-51,1080607", "bosque"];
        assert!(DistrictExtractor.extract(&fields).is_none());
    }
}
