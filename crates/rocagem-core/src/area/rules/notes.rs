//! Free-text remarks extraction.

use super::{is_text_field, ExtractionMatch, FieldExtractor};

/// Text fields among the last three, joined in reverse order.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotesExtractor;

impl FieldExtractor for NotesExtractor {
    type Output = String;

    fn field_name(&self) -> &'static str {
        "notes"
    }

    fn extract(&self, fields: &[&str]) -> Option<ExtractionMatch<String>> {
        let start = fields.len().saturating_sub(3);
        let parts: Vec<&str> = fields[start..]
            .iter()
            .rev()
            .copied()
            .filter(|f| is_text_field(f))
            .collect();

        if parts.is_empty() {
            return None;
        }

        Some(ExtractionMatch::positional(parts.join(" "), start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_only() {
        let fields = ["praça", "rua x", "2.332,83", "-23,3043262", "-51,1080607", "1"];
        assert!(NotesExtractor.extract(&fields).is_none());
    }

    #[test]
    fn test_reverse_order() {
        let fields = ["praça", "rua x", "kase", "1", "ver croqui", "2 areas"];
        let found = NotesExtractor.extract(&fields).unwrap();
        assert_eq!(found.value, "2 areas ver croqui");
    }

    #[test]
    fn test_short_fields_ignored() {
        let fields = ["praça rua x", "ok", "12", "1"];
        assert!(NotesExtractor.extract(&fields).is_none());
    }
}
