use crate::listings::models::RawListing;
use crate::listings::normalize::{format_price, normalize, normalize_land_size, PLACEHOLDER};
use serde_json::json;

fn raw(value: serde_json::Value) -> RawListing {
    serde_json::from_value(value).expect("raw listing should always decode")
}

#[test]
fn empty_record_normalizes_to_placeholders() {
    let listing = normalize(&raw(json!({})));

    assert_eq!(listing.area_name, PLACEHOLDER);
    assert_eq!(listing.street, PLACEHOLDER);
    assert_eq!(listing.suburb, PLACEHOLDER);
    assert_eq!(listing.state, PLACEHOLDER);
    assert_eq!(listing.property_type, PLACEHOLDER);
    assert_eq!(listing.price, None);
    assert_eq!(listing.bedrooms, PLACEHOLDER);
    assert_eq!(listing.bathrooms, PLACEHOLDER);
    assert_eq!(listing.garage_spaces, PLACEHOLDER);
    assert_eq!(listing.land_size, "None");
    assert_eq!(listing.listing_date, PLACEHOLDER);
    assert_eq!(listing.latitude, None);
    assert_eq!(listing.longitude, None);
    assert_eq!(listing.description, PLACEHOLDER);
}

#[test]
fn full_record_maps_every_field() {
    let listing = normalize(&raw(json!({
        "area_name": "Belmont North",
        "property_type": "House",
        "price": 950000,
        "listing_date": "2024-05-01",
        "address": { "street": "12 Hilltop Rd", "sal": "Belmont North", "state": "NSW" },
        "attributes": {
            "bedrooms": 3,
            "bathrooms": "2",
            "garage_spaces": 1,
            "land_size": "650",
            "description": "Quiet street"
        },
        "coordinates": { "latitude": -33.02, "longitude": 151.66 }
    })));

    assert_eq!(listing.area_name, "Belmont North");
    assert_eq!(listing.street, "12 Hilltop Rd");
    assert_eq!(listing.suburb, "Belmont North");
    assert_eq!(listing.state, "NSW");
    assert_eq!(listing.property_type, "House");
    assert_eq!(listing.price, Some(950000.0));
    assert_eq!(listing.bedrooms, "3");
    assert_eq!(listing.bathrooms, "2");
    assert_eq!(listing.garage_spaces, "1");
    assert_eq!(listing.land_size, "650 m²");
    assert_eq!(listing.listing_date, "2024-05-01");
    assert_eq!(listing.latitude, Some(-33.02));
    assert_eq!(listing.longitude, Some(151.66));
    assert_eq!(listing.description, "Quiet street");
}

#[test]
fn partial_nested_groups_do_not_panic() {
    // Groups present but empty, groups absent, and junk-typed fields.
    for value in [
        json!({ "address": {} }),
        json!({ "attributes": {}, "coordinates": {} }),
        json!({ "price": "contact agent", "attributes": { "bedrooms": null } }),
    ] {
        let listing = normalize(&raw(value));
        assert_eq!(listing.price, None, "non-numeric price must become None");
    }
}

#[test]
fn renormalizing_a_normalized_record_does_not_panic() {
    let first = normalize(&raw(json!({
        "area_name": "Belmont North",
        "price": 950000,
        "attributes": { "land_size": "650" }
    })));

    // Feed the flat output back through as if it were a raw record.
    let again = normalize(&raw(json!({
        "area_name": first.area_name,
        "property_type": first.property_type,
        "price": first.price,
        "listing_date": first.listing_date,
        "attributes": { "land_size": first.land_size },
    })));

    assert_eq!(again.price, Some(950000.0));
    assert_eq!(again.land_size, "650 m²", "suffixed value passes through");
}

#[test]
fn land_size_rule() {
    assert_eq!(normalize_land_size(None), "None");
    assert_eq!(normalize_land_size(Some(&json!(null))), "None");
    assert_eq!(normalize_land_size(Some(&json!(""))), "None");
    assert_eq!(normalize_land_size(Some(&json!("none"))), "None");
    assert_eq!(normalize_land_size(Some(&json!("NaN"))), "None");
    assert_eq!(normalize_land_size(Some(&json!("650"))), "650 m²");
    assert_eq!(normalize_land_size(Some(&json!(650))), "650 m²");
    assert_eq!(normalize_land_size(Some(&json!("650 m²"))), "650 m²");
    assert_eq!(normalize_land_size(Some(&json!("650 M²"))), "650 M²");
}

#[test]
fn price_formatting() {
    assert_eq!(format_price(None), "-");
    assert_eq!(format_price(Some(900.0)), "$900");
    assert_eq!(format_price(Some(900000.0)), "$900,000");
    assert_eq!(format_price(Some(1234567.0)), "$1,234,567");
}
