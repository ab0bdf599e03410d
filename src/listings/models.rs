use serde::Deserialize;
use serde_json::Value;

// listing
//  ├── area_name
//  ├── property_type
//  ├── price
//  ├── listing_date
//  ├── address
//  │    ├── street
//  │    ├── sal            (suburb / statistical area)
//  │    └── state
//  ├── attributes
//  │    ├── bedrooms
//  │    ├── bathrooms
//  │    ├── garage_spaces
//  │    ├── land_size
//  │    └── description
//  └── coordinates
//       ├── latitude
//       └── longitude

/// One raw property record as returned by the listings API. The upstream
/// is loose about types (counts arrive as numbers or strings, prices are
/// sometimes free text), so the wobbly fields stay as `Value` and get
/// pinned down in the normalizer.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawListing {
    pub area_name: Option<String>,
    pub property_type: Option<String>,
    pub price: Option<Value>,
    pub listing_date: Option<String>,

    pub address: Option<Address>,
    pub attributes: Option<Attributes>,
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Address {
    pub street: Option<String>,
    pub sal: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Attributes {
    pub bedrooms: Option<Value>,
    pub bathrooms: Option<Value>,
    pub garage_spaces: Option<Value>,
    pub land_size: Option<Value>,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Coordinates {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Top-level response envelope; an absent `results` key decodes to empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListingsResponse {
    pub results: Vec<RawListing>,
}
