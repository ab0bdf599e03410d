// app.rs
use crate::amenities::AmenityClient;
use crate::config::AppConfig;
use crate::listings::ListingsClient;
use std::sync::{Arc, Mutex};

/// Shared per-process state: immutable config, the two upstream clients,
/// and the slot holding the most recently built map page. The slot is the
/// only mutable state in the process; it is overwritten synchronously
/// before the index page that embeds it renders.
#[derive(Clone)]
pub struct App {
    pub config: AppConfig,
    pub listings: ListingsClient,
    pub amenities: AmenityClient,
    pub last_map: Arc<Mutex<Option<String>>>,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self, String> {
        let listings = ListingsClient::new(
            config.listings_base_url.clone(),
            config.listings_token.clone(),
        )
        .map_err(|e| format!("listings client: {e}"))?;

        let amenities = AmenityClient::new(config.overpass_url.clone())
            .map_err(|e| format!("amenity client: {e}"))?;

        Ok(Self {
            config,
            listings,
            amenities,
            last_map: Arc::new(Mutex::new(None)),
        })
    }

    /// Replace the stored map page. A poisoned lock just means a previous
    /// request panicked mid-write; the slot is still a plain String, so
    /// recover it.
    pub fn store_map(&self, html: String) {
        let mut slot = self.last_map.lock().unwrap_or_else(|e| e.into_inner());
        *slot = Some(html);
    }

    pub fn load_map(&self) -> Option<String> {
        let slot = self.last_map.lock().unwrap_or_else(|e| e.into_inner());
        slot.clone()
    }
}
