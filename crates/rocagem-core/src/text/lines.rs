//! Selection of candidate data lines from cleaned OCR text.

use crate::area::rules::patterns::{contains_any, ITEM_TYPES};

/// Column names that mark the spreadsheet header row.
pub const HEADER_KEYWORDS: &[&str] = &["tipo_item", "endereco", "bairro", "metragem", "latitude"];

/// Whether a line looks like the spreadsheet header row.
pub fn is_header_line(line: &str) -> bool {
    contains_any(&line.to_lowercase(), HEADER_KEYWORDS)
}

/// Whether a line past the header carries an item type and at least one digit.
pub fn is_data_line(line: &str) -> bool {
    contains_any(&line.to_lowercase(), ITEM_TYPES) && line.chars().any(|c| c.is_ascii_digit())
}

/// Single-pass iterator over the candidate data lines of a text.
///
/// Lines before the header (and the header itself) are never yielded. Text
/// without a header yields nothing.
#[derive(Debug, Clone)]
pub struct DataLines<'a> {
    lines: std::str::Lines<'a>,
    past_header: bool,
}

impl<'a> Iterator for DataLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            let line = line.trim();

            if !self.past_header {
                self.past_header = is_header_line(line);
                continue;
            }

            if !line.is_empty() && is_data_line(line) {
                return Some(line);
            }
        }

        None
    }
}

/// Iterate the candidate data lines of cleaned OCR text.
pub fn extract_data_lines(text: &str) -> DataLines<'_> {
    DataLines {
        lines: text.lines(),
        past_header: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_until_header() {
        let text = "Prefeitura de Londrina\n\
                    praça antes do cabeçalho 12\n\
                    TIPO_ITEM ENDERECO BAIRRO\n\
                    praça rua carijós 2.332,83 1";

        let lines: Vec<_> = extract_data_lines(text).collect();
        assert_eq!(lines, vec!["praça rua carijós 2.332,83 1"]);
    }

    #[test]
    fn test_no_header_yields_nothing() {
        let text = "praça rua carijós 2.332,83 1\nviela jorge casoni 908,80 1";
        assert_eq!(extract_data_lines(text).count(), 0);
    }

    #[test]
    fn test_drops_noise_lines() {
        let text = "tipo_item endereco\n\
                    \n\
                    página 1 de 3\n\
                    praça sem números\n\
                    Lotes irma bona dose 3.870,42 1\n\
                    fundo de vale r. angelo vicentini 7.195,78";

        let lines: Vec<_> = extract_data_lines(text).collect();
        assert_eq!(
            lines,
            vec![
                "Lotes irma bona dose 3.870,42 1",
                "fundo de vale r. angelo vicentini 7.195,78",
            ]
        );
    }

    #[test]
    fn test_is_data_line() {
        assert!(is_data_line("PRAÇA vital brasil 2.434,69"));
        assert!(is_data_line("lote público icós 438,56"));
        assert!(!is_data_line("lote público icós"));
        assert!(!is_data_line("rua tapuias 500,00"));
    }
}
