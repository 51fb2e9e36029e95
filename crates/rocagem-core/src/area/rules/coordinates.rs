//! Latitude/longitude extraction for the city's coordinate band.

use regex::Regex;

use super::patterns::{LATITUDE, LONGITUDE};
use super::{ExtractionMatch, FieldExtractor};

/// First coordinate of a fixed integer-degree band on the line.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateExtractor {
    name: &'static str,
    pattern: &'static Regex,
}

impl CoordinateExtractor {
    /// Latitudes of the form -23,dddd.
    pub fn latitude() -> Self {
        Self {
            name: "latitude",
            pattern: &*LATITUDE,
        }
    }

    /// Longitudes of the form -51,dddd.
    pub fn longitude() -> Self {
        Self {
            name: "longitude",
            pattern: &*LONGITUDE,
        }
    }
}

impl FieldExtractor for CoordinateExtractor {
    type Output = f64;

    fn field_name(&self) -> &'static str {
        self.name
    }

    fn extract(&self, fields: &[&str]) -> Option<ExtractionMatch<f64>> {
        fields.iter().enumerate().find_map(|(idx, field)| {
            let m = self.pattern.find(field)?;
            let value: f64 = m.as_str().replace(',', ".").parse().ok()?;
            Some(ExtractionMatch::pattern(value, idx))
        })
    }
}
