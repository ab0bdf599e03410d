// map/builder.rs
use crate::amenities::{AmenityBuckets, AmenityRecord};
use crate::listings::{format_price, NormalizedListing};
use crate::map::artifact::{MapArtifact, Marker, MarkerKind};
use maud::html;

/// Fallback map center when no listing has coordinates (Sydney CBD).
pub const DEFAULT_CENTER: (f64, f64) = (-33.8688, 151.2093);
pub const DEFAULT_ZOOM: u8 = 13;

const TIER_MID: f64 = 1_000_000.0;
const TIER_TOP: f64 = 1_500_000.0;

/// Marker color for a listing by price band. Missing or non-numeric
/// prices get the neutral color.
pub fn price_color(price: Option<f64>) -> &'static str {
    match price {
        Some(p) if p < TIER_MID => "green",
        Some(p) if p < TIER_TOP => "orange",
        Some(_) => "red",
        None => "blue",
    }
}

/// Arithmetic mean of the coordinates of every listing that has both,
/// or `None` when no listing does.
pub fn centroid(listings: &[NormalizedListing]) -> Option<(f64, f64)> {
    let points: Vec<(f64, f64)> = listings
        .iter()
        .filter_map(|l| Some((l.latitude?, l.longitude?)))
        .collect();

    if points.is_empty() {
        return None;
    }

    let n = points.len() as f64;
    let (sum_lat, sum_lon) = points
        .iter()
        .fold((0.0, 0.0), |(la, lo), (lat, lon)| (la + lat, lo + lon));

    Some((sum_lat / n, sum_lon / n))
}

/// Assemble the map: one price-colored marker per locatable listing, one
/// glyph marker per amenity, centered on the listings centroid when there
/// is one. Pure; the amenity lookup happens before this is called.
pub fn build_map(listings: &[NormalizedListing], amenities: &AmenityBuckets) -> MapArtifact {
    let mut markers = Vec::new();
    let mut bounds = Vec::new();

    for listing in listings {
        let (lat, lon) = match (listing.latitude, listing.longitude) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => continue,
        };

        markers.push(Marker {
            lat,
            lon,
            kind: MarkerKind::Listing {
                color: price_color(listing.price),
            },
            tooltip: listing.area_name.clone(),
            popup: listing_popup(listing),
        });
        bounds.push((lat, lon));
    }

    let center = centroid(listings).unwrap_or(DEFAULT_CENTER);

    for record in &amenities.railway {
        markers.push(amenity_marker(record, MarkerKind::Railway, "Railway Station"));
    }
    for record in &amenities.school {
        markers.push(amenity_marker(record, MarkerKind::School, "School"));
    }
    for record in &amenities.grocery {
        markers.push(amenity_marker(record, MarkerKind::Grocery, "Grocery Store"));
    }

    MapArtifact {
        center,
        zoom: DEFAULT_ZOOM,
        markers,
        bounds,
    }
}

fn listing_popup(listing: &NormalizedListing) -> String {
    html! {
        b { (listing.area_name) } br;
        "Type: " (listing.property_type) br;
        "Price: " (format_price(listing.price)) br;
        "Beds: " (listing.bedrooms) " | Baths: " (listing.bathrooms)
    }
    .into_string()
}

fn amenity_marker(record: &AmenityRecord, kind: MarkerKind, label: &str) -> Marker {
    let popup = html! {
        (kind.glyph()) " " b { (record.name) } br;
        (label)
    }
    .into_string();

    Marker {
        lat: record.lat,
        lon: record.lon,
        kind,
        tooltip: record.name.clone(),
        popup,
    }
}
