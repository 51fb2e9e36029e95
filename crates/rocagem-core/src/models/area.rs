//! Area record model produced by the OCR line parser.

use serde::{Deserialize, Serialize};

/// District value used when no neighborhood could be read from a line.
pub const UNSPECIFIED_DISTRICT: &str = "unspecified";

/// A single mowing/maintenance area read from one spreadsheet row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaRecord {
    /// Category label (e.g. "praça", "area publica").
    pub item_type: String,

    /// Street or location description.
    pub address: String,

    /// Neighborhood name.
    pub district: String,

    /// Surface in square meters.
    pub area_m2: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    /// Lot number on the source sheet (1-999).
    pub lot_number: u16,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Point payload, present only when both coordinates were read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

/// Geographic point of an area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Build a point only when both components are known.
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => Some(Self {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }
}

impl AreaRecord {
    /// Whether the district fell back to the placeholder value.
    pub fn has_district(&self) -> bool {
        self.district != UNSPECIFIED_DISTRICT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_need_both_parts() {
        assert!(Coordinates::from_parts(Some(-23.3), None).is_none());
        assert!(Coordinates::from_parts(None, Some(-51.1)).is_none());

        let point = Coordinates::from_parts(Some(-23.3), Some(-51.1)).unwrap();
        assert_eq!(point.latitude, -23.3);
        assert_eq!(point.longitude, -51.1);
    }

    #[test]
    fn test_serialization_skips_missing_optionals() {
        let record = AreaRecord {
            item_type: "praça".to_string(),
            address: "rua carijós".to_string(),
            district: UNSPECIFIED_DISTRICT.to_string(),
            area_m2: 150.0,
            latitude: None,
            longitude: None,
            lot_number: 1,
            notes: None,
            coordinates: None,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("latitude").is_none());
        assert!(json.get("coordinates").is_none());
        assert_eq!(json["lot_number"], 1);
        assert!(!record.has_district());
    }
}
