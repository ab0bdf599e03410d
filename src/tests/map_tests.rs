use crate::amenities::{AmenityBuckets, AmenityRecord};
use crate::listings::NormalizedListing;
use crate::map::{build_map, centroid, price_color, MarkerKind, DEFAULT_CENTER};
use crate::templates::pages::index_page;

fn listing(price: Option<f64>, lat: Option<f64>, lon: Option<f64>) -> NormalizedListing {
    NormalizedListing {
        area_name: "Belmont North".to_string(),
        street: "-".to_string(),
        suburb: "-".to_string(),
        state: "-".to_string(),
        property_type: "House".to_string(),
        price,
        bedrooms: "-".to_string(),
        bathrooms: "-".to_string(),
        garage_spaces: "-".to_string(),
        land_size: "None".to_string(),
        listing_date: "-".to_string(),
        latitude: lat,
        longitude: lon,
        description: "-".to_string(),
    }
}

fn amenity(name: &str) -> AmenityRecord {
    AmenityRecord {
        name: name.to_string(),
        lat: -33.0,
        lon: 151.6,
    }
}

#[test]
fn price_tier_boundaries() {
    assert_eq!(price_color(Some(999_999.0)), "green");
    assert_eq!(price_color(Some(1_000_000.0)), "orange");
    assert_eq!(price_color(Some(1_499_999.0)), "orange");
    assert_eq!(price_color(Some(1_500_000.0)), "red");
    assert_eq!(price_color(None), "blue");
}

#[test]
fn centroid_is_mean_of_locatable_listings() {
    let listings = vec![
        listing(None, Some(-33.0), Some(151.0)),
        listing(None, Some(-35.0), Some(153.0)),
        listing(None, None, Some(150.0)), // half a coordinate doesn't count
    ];

    assert_eq!(centroid(&listings), Some((-34.0, 152.0)));
    assert_eq!(centroid(&[]), None);
    assert_eq!(centroid(&[listing(None, None, None)]), None);
}

// One priced listing with coordinates, one fully absent: exactly one green
// marker, recentered on the single coordinate; the absent listing still
// renders in the table with placeholders.
#[test]
fn two_listing_build_end_to_end() {
    let listings = vec![
        listing(Some(900_000.0), Some(-33.02), Some(151.66)),
        listing(None, None, None),
    ];

    let artifact = build_map(&listings, &AmenityBuckets::default());

    let listing_markers: Vec<_> = artifact
        .markers
        .iter()
        .filter(|m| matches!(m.kind, MarkerKind::Listing { .. }))
        .collect();
    assert_eq!(listing_markers.len(), 1);
    assert_eq!(
        listing_markers[0].kind,
        MarkerKind::Listing { color: "green" }
    );
    assert_eq!(artifact.center, (-33.02, 151.66));
    assert_eq!(artifact.bounds, vec![(-33.02, 151.66)]);

    let table = index_page("Belmont North", &listings).into_string();
    assert!(table.contains("2 listing(s) found."));
    assert!(table.contains("$900,000"));
    assert!(
        table.contains("<td>-</td>"),
        "absent fields must render as placeholders"
    );
}

#[test]
fn no_locatable_listings_keeps_fallback_center() {
    let artifact = build_map(&[listing(None, None, None)], &AmenityBuckets::default());

    assert_eq!(artifact.center, DEFAULT_CENTER);
    assert!(artifact.bounds.is_empty());
    assert!(artifact.markers.is_empty());
}

#[test]
fn amenity_markers_styled_by_category() {
    let buckets = AmenityBuckets {
        railway: vec![amenity("Belmont Station")],
        school: vec![amenity("Belmont High")],
        grocery: vec![amenity("FreshMart")],
    };

    let artifact = build_map(&[], &buckets);

    let kinds: Vec<_> = artifact.markers.iter().map(|m| m.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![MarkerKind::Railway, MarkerKind::School, MarkerKind::Grocery]
    );
    assert!(artifact.markers[1].popup.contains("Belmont High"));
    assert!(artifact.markers[1].popup.contains("School"));
}

#[test]
fn artifact_html_serialization() {
    let listings = vec![listing(Some(2_000_000.0), Some(-33.0), Some(151.6))];
    let html = build_map(&listings, &AmenityBuckets::default()).to_html();

    assert!(html.contains("L.circleMarker([-33, 151.6]"));
    assert!(html.contains("\"red\""));
    assert!(html.contains("fitBounds"));

    // No listing coordinates: centered on the fallback, no viewport fit.
    let empty = build_map(&[], &AmenityBuckets::default()).to_html();
    assert!(empty.contains("setView([-33.8688, 151.2093], 13)"));
    assert!(!empty.contains("fitBounds"));
}
