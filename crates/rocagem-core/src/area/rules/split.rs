//! Splitting of one OCR line into spreadsheet fields.

use super::patterns::{is_numeric_token, COLUMN_GAP};

/// Trim whitespace and the vertical rules OCR reads from table borders.
fn clean_field(field: &str) -> &str {
    field.trim_matches(|c: char| c.is_whitespace() || c == '|')
}

/// Split on column gaps (ruled borders, 2+ whitespace or a tab).
///
/// Cells are kept positionally, so a blank cell stays as an empty field.
pub fn split_on_gaps(line: &str) -> Vec<&str> {
    COLUMN_GAP.split(clean_field(line)).map(clean_field).collect()
}

/// Split right before every whitespace-delimited numeric token.
///
/// Recovers rows where the OCR engine used single spaces throughout: text
/// columns stay together and each number starts a new field.
pub fn split_before_numbers(line: &str) -> Vec<&str> {
    let line = line.trim();
    let mut cuts = vec![0];

    let mut token_start = None;
    for (idx, c) in line.char_indices().chain(std::iter::once((line.len(), ' '))) {
        match (c.is_whitespace(), token_start) {
            (false, None) => token_start = Some(idx),
            (true, Some(start)) => {
                if start > 0 && is_numeric_token(&line[start..idx]) {
                    cuts.push(start);
                }
                token_start = None;
            }
            _ => {}
        }
    }
    cuts.push(line.len());

    cuts.windows(2)
        .map(|w| clean_field(&line[w[0]..w[1]]))
        .filter(|field| !field.is_empty())
        .collect()
}

/// Split a line into fields, falling back to number boundaries when the
/// column gaps yield fewer than `min_fields`.
pub fn split_fields(line: &str, min_fields: usize) -> Vec<&str> {
    let fields = split_on_gaps(line);
    if fields.len() >= min_fields {
        return fields;
    }

    split_before_numbers(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_on_gaps() {
        let line = "praça\trua carijós  paraná   2.332,83\t-23,3043262";
        assert_eq!(
            split_on_gaps(line),
            vec!["praça", "rua carijós", "paraná", "2.332,83", "-23,3043262"]
        );
    }

    #[test]
    fn test_blank_cell_is_kept() {
        let line = "| praça | | 2.332,83 | -23,3043262 | -51,1080607 | 1 |";
        assert_eq!(
            split_on_gaps(line),
            vec!["praça", "", "2.332,83", "-23,3043262", "-51,1080607", "1"]
        );
    }

    #[test]
    fn test_split_before_numbers() {
        let line = "praça rua carijós c arruana paraná 2.332,83 -23,3043262 -51,1080607 1";
        assert_eq!(
            split_before_numbers(line),
            vec![
                "praça rua carijós c arruana paraná",
                "2.332,83",
                "-23,3043262",
                "-51,1080607",
                "1",
            ]
        );
    }

    #[test]
    fn test_number_inside_text_starts_field() {
        let line = "praça tietê c duque de caxias 2 praças recreio 2.457,00";
        assert_eq!(
            split_before_numbers(line),
            vec!["praça tietê c duque de caxias", "2 praças recreio", "2.457,00"]
        );
    }

    #[test]
    fn test_split_fields_falls_back() {
        let single_spaced = "area publica rua tupiniquins casoni 150 -23,295 -51,154 1";
        assert_eq!(split_fields(single_spaced, 5).len(), 5);

        let too_short = "viela jorge casoni 908,80";
        assert_eq!(split_fields(too_short, 5), vec!["viela jorge casoni", "908,80"]);
    }
}
