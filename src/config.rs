// config.rs
use std::net::SocketAddr;
use url::Url;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_LISTINGS_URL: &str =
    "https://www.microburbs.com.au/report_generator/api/suburb/properties";
const DEFAULT_LISTINGS_TOKEN: &str = "test";
const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";
const DEFAULT_SUBURB: &str = "Belmont North";

/// Process-wide configuration, resolved once at startup and passed
/// explicitly into each component. Nothing here mutates after `main`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub listings_base_url: Url,
    pub listings_token: String,
    pub overpass_url: Url,
    pub default_suburb: String,
}

impl AppConfig {
    /// Read configuration from the environment, falling back to the
    /// defaults above for anything unset.
    pub fn from_env() -> Result<Self, String> {
        let bind_addr = env_or("BIND_ADDR", DEFAULT_BIND_ADDR)
            .parse::<SocketAddr>()
            .map_err(|e| format!("BIND_ADDR is not a valid socket address: {e}"))?;

        let listings_base_url = Url::parse(&env_or("LISTINGS_API_URL", DEFAULT_LISTINGS_URL))
            .map_err(|e| format!("LISTINGS_API_URL is not a valid URL: {e}"))?;

        let overpass_url = Url::parse(&env_or("OVERPASS_URL", DEFAULT_OVERPASS_URL))
            .map_err(|e| format!("OVERPASS_URL is not a valid URL: {e}"))?;

        Ok(Self {
            bind_addr,
            listings_base_url,
            listings_token: env_or("LISTINGS_API_TOKEN", DEFAULT_LISTINGS_TOKEN),
            overpass_url,
            default_suburb: env_or("DEFAULT_SUBURB", DEFAULT_SUBURB),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
