//! Common regex patterns and vocabularies for spreadsheet line extraction.

use lazy_static::lazy_static;
use regex::Regex;

/// Closed vocabulary of area categories, lowercase.
pub const ITEM_TYPES: &[&str] = &[
    "area publica",
    "praça",
    "canteiros",
    "viela",
    "lote público",
    "lotes",
    "fundo de vale",
];

/// Tokens that mark a street/location description, lowercase.
pub const STREET_INDICATORS: &[&str] = &["rua", "av", "avenida", "praça", "travessa", "alameda"];

/// Neighborhoods known to appear on the sheets, lowercase.
pub const KNOWN_DISTRICTS: &[&str] = &[
    "casoni",
    "paraná",
    "matarazzo",
    "kase",
    "são caetano",
    "portuguesa",
    "recreio",
    "santa monica",
];

lazy_static! {
    // Column gaps left by the OCR engine: a ruled border, 2+ spaces or a tab
    pub static ref COLUMN_GAP: Regex = Regex::new(r"\s*\|\s*|\s{2,}|\t").unwrap();

    // A whole token that is a number or coordinate (150, 2.332,83, -23,3043262)
    pub static ref NUMERIC_TOKEN: Regex = Regex::new(
        r"^-?\d+(?:[.,]\d*)*$"
    ).unwrap();

    // Brazilian decimal: 29.184,98 / 2.332,83 / 244,25 / 150
    pub static ref BR_DECIMAL: Regex = Regex::new(
        r"\d{1,3}(?:\.\d{3})+(?:,\d+)?|\d+(?:,\d+)?"
    ).unwrap();

    // Coordinates are only read around the city: -23,xxxx / -51,xxxx
    pub static ref LATITUDE: Regex = Regex::new(r"-23[.,]\d{4,}").unwrap();

    pub static ref LONGITUDE: Regex = Regex::new(r"-51[.,]\d{4,}").unwrap();
}

/// Case-sensitive substring test against a vocabulary; callers lowercase first.
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Whether a field is a bare number or coordinate rather than text.
pub fn is_numeric_token(field: &str) -> bool {
    NUMERIC_TOKEN.is_match(field.trim())
}

/// Parse a Brazilian-formatted decimal ("2.332,83" -> 2332.83).
pub fn parse_br_decimal(s: &str) -> Option<f64> {
    s.trim().replace('.', "").replace(',', ".").parse().ok()
}

/// Format a value the way the sheets print it ("2332.83" -> "2.332,83").
pub fn format_br_decimal(value: f64) -> String {
    let s = format!("{:.2}", value.abs());
    let (integer_part, decimal_part) = s.split_once('.').unwrap_or((s.as_str(), "00"));

    // Add thousand separators
    let chars: Vec<char> = integer_part.chars().collect();
    let mut formatted = String::new();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            formatted.push('.');
        }
        formatted.push(*c);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{},{}", sign, formatted, decimal_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_br_decimal() {
        assert_eq!(parse_br_decimal("29.184,98"), Some(29184.98));
        assert_eq!(parse_br_decimal("2.332,83"), Some(2332.83));
        assert_eq!(parse_br_decimal("244,25"), Some(244.25));
        assert_eq!(parse_br_decimal("150"), Some(150.0));
        assert_eq!(parse_br_decimal("abc"), None);
    }

    #[test]
    fn test_format_br_decimal() {
        assert_eq!(format_br_decimal(2332.83), "2.332,83");
        assert_eq!(format_br_decimal(29184.98), "29.184,98");
        assert_eq!(format_br_decimal(150.0), "150,00");
        assert_eq!(format_br_decimal(1234567.5), "1.234.567,50");
        assert_eq!(format_br_decimal(0.0), "0,00");
    }

    #[test]
    fn test_br_decimal_pattern() {
        let found: Vec<_> = BR_DECIMAL
            .find_iter("casoni 29.184,98 e 1500 m")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(found, vec!["29.184,98", "1500"]);
    }

    #[test]
    fn test_is_numeric_token() {
        assert!(is_numeric_token("150"));
        assert!(is_numeric_token("2.332,83"));
        assert!(is_numeric_token("-23,3043262"));
        assert!(is_numeric_token("23,"));
        assert!(!is_numeric_token("2 praças"));
        assert!(!is_numeric_token("kase"));
        assert!(!is_numeric_token(""));
    }
}
