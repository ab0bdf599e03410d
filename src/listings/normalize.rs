// listings/normalize.rs
use crate::listings::models::RawListing;
use serde_json::Value;

/// Placeholder rendered for any absent display field.
pub const PLACEHOLDER: &str = "-";

/// A listing flattened and defaulted, ready for the table and the map.
///
/// Sentinel policy: display fields are `String` and default to `"-"`;
/// the three fields the map does arithmetic on (`price`, `latitude`,
/// `longitude`) are `Option<f64>` and the placeholder only appears at
/// render time. A non-numeric upstream price normalizes to `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedListing {
    pub area_name: String,
    pub street: String,
    pub suburb: String,
    pub state: String,
    pub property_type: String,
    pub price: Option<f64>,
    pub bedrooms: String,
    pub bathrooms: String,
    pub garage_spaces: String,
    pub land_size: String,
    pub listing_date: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub description: String,
}

/// Flatten one raw record. Total: every combination of missing nested
/// groups and missing fields produces a fully-populated record.
pub fn normalize(raw: &RawListing) -> NormalizedListing {
    let addr = raw.address.as_ref();
    let attr = raw.attributes.as_ref();
    let coords = raw.coordinates.as_ref();

    NormalizedListing {
        area_name: text(raw.area_name.as_deref()),
        street: text(addr.and_then(|a| a.street.as_deref())),
        suburb: text(addr.and_then(|a| a.sal.as_deref())),
        state: text(addr.and_then(|a| a.state.as_deref())),
        property_type: text(raw.property_type.as_deref()),
        price: raw.price.as_ref().and_then(Value::as_f64),
        bedrooms: value_text(attr.and_then(|a| a.bedrooms.as_ref())),
        bathrooms: value_text(attr.and_then(|a| a.bathrooms.as_ref())),
        garage_spaces: value_text(attr.and_then(|a| a.garage_spaces.as_ref())),
        land_size: normalize_land_size(attr.and_then(|a| a.land_size.as_ref())),
        listing_date: text(raw.listing_date.as_deref()),
        latitude: coords.and_then(|c| c.latitude),
        longitude: coords.and_then(|c| c.longitude),
        description: text(attr.and_then(|a| a.description.as_deref())),
    }
}

/// Land sizes arrive as numbers, strings, junk strings, or nothing.
/// Absent/junk becomes `"None"`; bare values get the unit appended;
/// already-suffixed values pass through untouched.
pub fn normalize_land_size(raw: Option<&Value>) -> String {
    let text = match raw {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };

    let lower = text.to_lowercase();
    if matches!(lower.as_str(), "" | "none" | "nan") {
        "None".to_string()
    } else if !lower.ends_with("m²") {
        format!("{text} m²")
    } else {
        text
    }
}

/// Thousands-separated dollar amount, or the placeholder when absent.
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("${}", group_thousands(p.round() as i64)),
        None => PLACEHOLDER.to_string(),
    }
}

fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn text(value: Option<&str>) -> String {
    value.unwrap_or(PLACEHOLDER).to_string()
}

fn value_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}
