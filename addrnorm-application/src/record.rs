use crate::NormalizedAddress;
use serde::{Deserialize, Serialize};

pub const CSV_HEADER: [&str; 9] = [
    "Original Address",
    "Normalized Address",
    "Confidence",
    "Latitude",
    "Longitude",
    "Country",
    "State",
    "City",
    "Postal Code",
];

/// One row of the result file.
///
/// Missing values are written as empty cells.
#[derive(Debug, Serialize, Deserialize)]
pub struct CsvRecord {
    #[serde(rename = "Original Address")]
    pub original: String,
    #[serde(rename = "Normalized Address")]
    pub normalized: String,
    #[serde(rename = "Confidence")]
    pub confidence: f64,
    #[serde(rename = "Latitude")]
    pub latitude: Option<f64>,
    #[serde(rename = "Longitude")]
    pub longitude: Option<f64>,
    #[serde(rename = "Country")]
    pub country: Option<String>,
    #[serde(rename = "State")]
    pub state: Option<String>,
    #[serde(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "Postal Code")]
    pub postal_code: Option<String>,
}

impl From<NormalizedAddress> for CsvRecord {
    fn from(from: NormalizedAddress) -> Self {
        let NormalizedAddress {
            original,
            normalized,
            confidence,
            latitude,
            longitude,
            country,
            state,
            city,
            postal_code,
        } = from;
        Self {
            original,
            normalized,
            confidence,
            latitude,
            longitude,
            country,
            state,
            city,
            postal_code,
        }
    }
}

impl From<CsvRecord> for NormalizedAddress {
    fn from(from: CsvRecord) -> Self {
        let CsvRecord {
            original,
            normalized,
            confidence,
            latitude,
            longitude,
            country,
            state,
            city,
            postal_code,
        } = from;
        Self {
            original,
            normalized,
            confidence,
            latitude,
            longitude,
            country,
            state,
            city,
            postal_code,
        }
    }
}
