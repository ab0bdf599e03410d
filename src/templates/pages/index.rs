// templates/pages/index.rs

use crate::listings::{format_price, NormalizedListing};
use crate::templates::page_layout;
use maud::{html, Markup};

pub fn index_page(suburb: &str, listings: &[NormalizedListing]) -> Markup {
    page_layout(
        &format!("Properties in {suburb}"),
        html! {
            main {
                h1 { "Properties in " (suburb) }

                form class="search" action="/" method="get" {
                    label for="suburb" class="sr-only" { "Suburb" }
                    input type="text" name="suburb" id="suburb"
                        placeholder="Suburb name..." value=(suburb);
                    button type="submit" { "Search" }
                }

                @if listings.is_empty() {
                    p { "No listings found for " strong { (suburb) } "." }
                } @else {
                    p { (listings.len()) " listing(s) found." }
                    (listing_table(listings))
                }

                iframe class="map" src="/map" title="Property map" {}
            }
        },
    )
}

fn listing_table(listings: &[NormalizedListing]) -> Markup {
    html! {
        table {
            thead {
                tr {
                    th { "Area" }
                    th { "Street" }
                    th { "Suburb" }
                    th { "State" }
                    th { "Type" }
                    th { "Price" }
                    th { "Beds" }
                    th { "Baths" }
                    th { "Garage" }
                    th { "Land Size" }
                    th { "Listed" }
                    th { "Lat" }
                    th { "Lon" }
                    th { "Description" }
                }
            }
            tbody {
                @for l in listings {
                    tr {
                        td { (l.area_name) }
                        td { (l.street) }
                        td { (l.suburb) }
                        td { (l.state) }
                        td { (l.property_type) }
                        td { (format_price(l.price)) }
                        td { (l.bedrooms) }
                        td { (l.bathrooms) }
                        td { (l.garage_spaces) }
                        td { (l.land_size) }
                        td { (l.listing_date) }
                        td { (coord(l.latitude)) }
                        td { (coord(l.longitude)) }
                        td class="description" { (l.description) }
                    }
                }
            }
        }
    }
}

fn coord(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.5}"),
        None => "-".to_string(),
    }
}

/// Shown on /map before any search has built an artifact.
pub fn map_placeholder_page() -> Markup {
    page_layout(
        "Property Map",
        html! {
            main {
                h1 { "No map yet" }
                p { "Run a " a href="/" { "suburb search" } " first to generate the map." }
            }
        },
    )
}
