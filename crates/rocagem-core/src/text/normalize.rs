//! Cleanup of raw OCR text before line extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BLANK_LINE_RUN: Regex = Regex::new(r"\n{3,}").unwrap();
    static ref HORIZONTAL_SPACE_RUN: Regex = Regex::new(r"[ \t]+").unwrap();
}

/// Glyphs OCR engines commonly emit in place of plain characters.
///
/// No replacement produces a glyph that appears on the left-hand side.
const GLYPH_CORRECTIONS: &[(char, &str)] = &[
    ('¤', "o"),
    ('®', "o"),
    ('©', "c"),
    ('°', "o"),
    ('¬', "l"),
    ('¢', "c"),
    ('£', "L"),
    ('§', "s"),
    ('†', "t"),
    ('‡', "t"),
    ('•', "-"),
    ('…', "..."),
    ('„', "\""),
    ('“', "\""),
    ('”', "\""),
    ('‘', "'"),
    ('’', "'"),
];

/// Clean OCR output: collapse blank-line and space runs, fix misread glyphs, trim.
pub fn normalize(raw: &str) -> String {
    let text = raw.replace("\r\n", "\n");
    let text = BLANK_LINE_RUN.replace_all(&text, "\n\n");
    let text = HORIZONTAL_SPACE_RUN.replace_all(&text, " ");

    let mut text = text.into_owned();
    for (glyph, replacement) in GLYPH_CORRECTIONS {
        if text.contains(*glyph) {
            text = text.replace(*glyph, replacement);
        }
    }

    text.trim().to_string()
}
