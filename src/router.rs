use crate::amenities::DEFAULT_RADIUS_M;
use crate::app::App;
use crate::errors::ServerError;
use crate::listings::normalize;
use crate::map::{build_map, centroid, DEFAULT_CENTER};
use crate::responses::{html_response, json_response, raw_html_response, ResultResp};
use crate::templates;
use astra::Request;
use serde_json::json;
use std::collections::HashMap;

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => index(&req, app),
        ("GET", "/map") => map_page(app),
        ("GET", "/api/properties") => api_properties(&req, app),
        _ => Err(ServerError::NotFound),
    }
}

/// Search page: fetch listings for the requested suburb, rebuild the map,
/// render the table. A listings failure aborts the whole request; an
/// amenity failure does not (it is absorbed inside `aggregate`).
fn index(req: &Request, app: &App) -> ResultResp {
    let params = parse_query(req);
    let suburb = params
        .get("suburb")
        .filter(|s| !s.is_empty())
        .cloned()
        .unwrap_or_else(|| app.config.default_suburb.clone());

    let raw = app.listings.fetch(&suburb)?;
    let listings: Vec<_> = raw.iter().map(normalize).collect();

    // Amenity search runs at the listings centroid, or the fallback
    // center when nothing is locatable.
    let (lat, lon) = centroid(&listings).unwrap_or(DEFAULT_CENTER);
    let amenities = app.amenities.aggregate(lat, lon, DEFAULT_RADIUS_M);

    let artifact = build_map(&listings, &amenities);
    app.store_map(artifact.to_html());

    html_response(templates::pages::index_page(&suburb, &listings))
}

/// The most recently built map document, served from the in-process slot.
fn map_page(app: &App) -> ResultResp {
    match app.load_map() {
        Some(html) => raw_html_response(html),
        None => html_response(templates::pages::map_placeholder_page()),
    }
}

/// Raw upstream passthrough: the listings body verbatim, or an error
/// object with a 500 status.
fn api_properties(req: &Request, app: &App) -> ResultResp {
    let params = parse_query(req);
    let suburb = params
        .get("suburb")
        .filter(|s| !s.is_empty())
        .cloned()
        .unwrap_or_else(|| app.config.default_suburb.clone());

    match app.listings.fetch_raw(&suburb) {
        Ok(body) => json_response(200, &body),
        Err(e) => json_response(500, &json!({ "error": e.to_string() })),
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    let mut map = HashMap::new();

    if let Some(q) = req.uri().query() {
        for (k, v) in url::form_urlencoded::parse(q.as_bytes()) {
            map.insert(k.into_owned(), v.into_owned());
        }
    }

    map
}
