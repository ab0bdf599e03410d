use serde::Deserialize;
use std::collections::HashMap;

/// One point of interest near the map center.
#[derive(Debug, Clone, PartialEq)]
pub struct AmenityRecord {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

/// Amenities grouped into the three fixed categories the map renders.
/// Built fresh per request; never persisted.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AmenityBuckets {
    pub railway: Vec<AmenityRecord>,
    pub school: Vec<AmenityRecord>,
    pub grocery: Vec<AmenityRecord>,
}

impl AmenityBuckets {
    pub fn total(&self) -> usize {
        self.railway.len() + self.school.len() + self.grocery.len()
    }
}

/// Overpass response envelope.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OverpassResponse {
    pub elements: Vec<OverpassElement>,
}

/// One node from the geodata response. Ways/relations without a direct
/// position decode with `lat`/`lon` absent and are skipped downstream.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OverpassElement {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub tags: HashMap<String, String>,
}
