//! Mapping of area records to the remote store's service-area rows.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::area::rules::patterns::format_br_decimal;
use crate::models::area::{AreaRecord, Coordinates};

/// Tag stored in the metadata of every imported row.
pub const SOURCE_TAG: &str = "OCR_IMAGENS_PLANILHA";

/// Half side of the square drawn around a point, in degrees (~10 m).
pub const POINT_BUFFER_DEG: f64 = 0.0001;

/// Maximum number of address characters used in a row name.
const NAME_ADDRESS_CHARS: usize = 50;

/// Service category in the remote store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Rocagem,
    #[serde(rename = "MANUTENCAO_PRAÇA")]
    ManutencaoPraca,
    RocagemCanteiros,
    RocagemViela,
    RocagemLote,
    RocagemLotes,
    RocagemFundoVale,
}

impl Category {
    /// Category of the earliest known keyword in an item type label.
    pub fn from_item_type(item_type: &str) -> Self {
        let label = item_type.to_lowercase();
        [
            ("area publica", Self::Rocagem),
            ("praça", Self::ManutencaoPraca),
            ("canteiros", Self::RocagemCanteiros),
            ("viela", Self::RocagemViela),
            ("lote público", Self::RocagemLote),
            ("lotes", Self::RocagemLotes),
            ("fundo de vale", Self::RocagemFundoVale),
        ]
        .into_iter()
        .filter_map(|(keyword, category)| label.find(keyword).map(|pos| (pos, category)))
        .min_by_key(|(pos, _)| *pos)
        .map(|(_, category)| category)
        .unwrap_or(Self::Rocagem)
    }
}

/// Priority given to imported areas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    #[default]
    Media,
}

/// Workflow status of a freshly imported area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[default]
    Pendente,
}

/// GeoJSON polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    #[serde(rename = "type")]
    pub kind: String,
    /// Rings of `[longitude, latitude]` positions.
    pub coordinates: Vec<Vec<[f64; 2]>>,
}

impl Polygon {
    /// Closed square of half side `buffer` degrees around a point.
    pub fn around(point: Coordinates, buffer: f64) -> Self {
        let (lat, lng) = (point.latitude, point.longitude);
        Self {
            kind: "Polygon".to_string(),
            coordinates: vec![vec![
                [lng - buffer, lat - buffer],
                [lng + buffer, lat - buffer],
                [lng + buffer, lat + buffer],
                [lng - buffer, lat + buffer],
                [lng - buffer, lat - buffer],
            ]],
        }
    }
}

/// Source values kept alongside the mapped row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceAreaMetadata {
    pub item_type_original: String,
    pub area_m2: f64,
    pub lot_number: u16,
    pub latitude_original: Option<f64>,
    pub longitude_original: Option<f64>,
    pub source: String,
    pub imported_at: DateTime<Utc>,
}

/// Row shape of the remote `service_areas` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceArea {
    /// Derived name, also the duplicate key.
    pub name: String,
    pub description: String,
    pub geometry: Option<Polygon>,
    pub category: Category,
    pub priority: Priority,
    pub status: Status,
    pub estimated_duration_minutes: u32,
    pub cost_estimate: Decimal,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub metadata: ServiceAreaMetadata,
}

impl ServiceArea {
    /// Map a record using `now` for every timestamp.
    pub fn from_record(record: &AreaRecord, now: DateTime<Utc>) -> Self {
        let notes = record.notes.clone().unwrap_or_else(|| {
            format!(
                "Metragem: {} m², Lote: {}",
                format_br_decimal(record.area_m2),
                record.lot_number
            )
        });

        Self {
            name: service_name(&record.item_type, &record.address),
            description: format!("Área de roçagem: {}", record.address),
            geometry: record
                .coordinates
                .map(|point| Polygon::around(point, POINT_BUFFER_DEG)),
            category: Category::from_item_type(&record.item_type),
            priority: Priority::default(),
            status: Status::default(),
            estimated_duration_minutes: estimate_duration_minutes(record.area_m2),
            cost_estimate: estimate_cost(record.area_m2),
            notes,
            created_at: now,
            updated_at: now,
            metadata: ServiceAreaMetadata {
                item_type_original: record.item_type.clone(),
                area_m2: record.area_m2,
                lot_number: record.lot_number,
                latitude_original: record.latitude,
                longitude_original: record.longitude,
                source: SOURCE_TAG.to_string(),
                imported_at: now,
            },
        }
    }
}

impl From<&AreaRecord> for ServiceArea {
    fn from(record: &AreaRecord) -> Self {
        Self::from_record(record, Utc::now())
    }
}

/// "<Title Cased type> - <first 50 chars of address>".
pub fn service_name(item_type: &str, address: &str) -> String {
    let address: String = address.chars().take(NAME_ADDRESS_CHARS).collect();
    format!("{} - {}", title_case(item_type), address)
}

/// One hour of setup plus 30 minutes per 1000 m².
pub fn estimate_duration_minutes(area_m2: f64) -> u32 {
    (60.0 + area_m2 / 1000.0 * 30.0) as u32
}

/// R$ 0,50 per m², rounded to cents.
pub fn estimate_cost(area_m2: f64) -> Decimal {
    Decimal::from_f64(area_m2)
        .map(|area| area * Decimal::new(50, 2))
        .unwrap_or_default()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut word_start = true;

    for c in s.chars() {
        if word_start {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        word_start = !c.is_alphabetic();
    }

    out
}
