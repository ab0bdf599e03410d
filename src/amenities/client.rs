// amenities/client.rs
use crate::amenities::models::{AmenityBuckets, AmenityRecord, OverpassElement, OverpassResponse};
use crate::listings::UpstreamError;
use reqwest::blocking::Client;
use std::time::Duration;
use url::Url;

const QUERY_TIMEOUT: Duration = Duration::from_secs(20);

/// Default search radius around the map center, in meters.
pub const DEFAULT_RADIUS_M: u32 = 2000;

/// Client for the Overpass-style geodata endpoint. Amenity lookup is
/// best-effort enrichment: every failure degrades to empty buckets.
#[derive(Clone)]
pub struct AmenityClient {
    client: Client,
    endpoint: Url,
}

impl AmenityClient {
    pub fn new(endpoint: Url) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(QUERY_TIMEOUT)
            .build()
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    /// Query railway stations, schools, and supermarkets within
    /// `radius_m` meters of a point. Never fails: network errors, bad
    /// statuses, and malformed bodies all yield empty buckets so a map
    /// still renders without amenities.
    pub fn aggregate(&self, lat: f64, lon: f64, radius_m: u32) -> AmenityBuckets {
        match self.try_aggregate(lat, lon, radius_m) {
            Ok(buckets) => buckets,
            Err(e) => {
                eprintln!("⚠️ Amenity lookup failed, continuing without: {e}");
                AmenityBuckets::default()
            }
        }
    }

    fn try_aggregate(
        &self,
        lat: f64,
        lon: f64,
        radius_m: u32,
    ) -> Result<AmenityBuckets, UpstreamError> {
        let query = overpass_query(lat, lon, radius_m);

        let resp = self
            .client
            .get(self.endpoint.clone())
            .query(&[("data", query.as_str())])
            .send()
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let decoded: OverpassResponse = resp
            .json()
            .map_err(|e| UpstreamError::Decode(e.to_string()))?;

        Ok(classify(decoded.elements))
    }
}

/// One compound query for all three categories in a single round trip.
fn overpass_query(lat: f64, lon: f64, radius_m: u32) -> String {
    format!(
        "[out:json];\
         (\
           node[\"railway\"=\"station\"](around:{radius_m},{lat},{lon});\
           node[\"amenity\"=\"school\"](around:{radius_m},{lat},{lon});\
           node[\"shop\"=\"supermarket\"](around:{radius_m},{lat},{lon});\
         );\
         out body;"
    )
}

/// Bucket each element by its first matching tag pattern, in fixed order:
/// railway station, then school, then supermarket. Elements matching none
/// of the three, or missing a position, are dropped.
pub fn classify(elements: Vec<OverpassElement>) -> AmenityBuckets {
    let mut buckets = AmenityBuckets::default();

    for el in elements {
        let (lat, lon) = match (el.lat, el.lon) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => continue,
        };

        let record = AmenityRecord {
            name: el
                .tags
                .get("name")
                .cloned()
                .unwrap_or_else(|| "Unnamed".to_string()),
            lat,
            lon,
        };

        if el.tags.get("railway").map(String::as_str) == Some("station") {
            buckets.railway.push(record);
        } else if el.tags.get("amenity").map(String::as_str) == Some("school") {
            buckets.school.push(record);
        } else if el.tags.get("shop").map(String::as_str) == Some("supermarket") {
            buckets.grocery.push(record);
        }
    }

    buckets
}
