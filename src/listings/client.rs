// listings/client.rs
use crate::listings::models::{ListingsResponse, RawListing};
use crate::listings::UpstreamError;
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use std::time::Duration;
use url::Url;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the suburb-properties listings API. One instance lives for
/// the whole process; per-request state is just the suburb name.
#[derive(Clone)]
pub struct ListingsClient {
    client: Client,
    base_url: Url,
    token: String,
}

impl ListingsClient {
    pub fn new(base_url: Url, token: String) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// Fetch the raw JSON body for a suburb, exactly as the upstream sent it.
    /// Used directly by the JSON passthrough endpoint.
    pub fn fetch_raw(&self, suburb: &str) -> Result<Value, UpstreamError> {
        let resp = self
            .client
            .get(self.base_url.clone())
            .query(&[("suburb", suburb)])
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        resp.json::<Value>()
            .map_err(|e| UpstreamError::Decode(e.to_string()))
    }

    /// Fetch and decode the `results` array for a suburb. No retries,
    /// no caching; one GET per call.
    pub fn fetch(&self, suburb: &str) -> Result<Vec<RawListing>, UpstreamError> {
        let body = self.fetch_raw(suburb)?;

        let decoded: ListingsResponse =
            serde_json::from_value(body).map_err(|e| UpstreamError::Decode(e.to_string()))?;

        eprintln!(
            "✅ Listings fetch for {suburb:?}: {} result(s)",
            decoded.results.len()
        );

        Ok(decoded.results)
    }
}
