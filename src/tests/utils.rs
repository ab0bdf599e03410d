use crate::app::App;
use crate::config::AppConfig;
use astra::{Body, Request, Response};
use std::io::Read;
use url::Url;

/// A closed local port: connections are refused immediately, which is how
/// the failure-path tests simulate an unreachable upstream without
/// touching the network.
pub const REFUSED_URL: &str = "http://127.0.0.1:9/";

/// Build an App whose upstream clients point at the given URLs.
pub fn test_app(listings_url: &str, overpass_url: &str) -> App {
    let config = AppConfig {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        listings_base_url: Url::parse(listings_url).unwrap(),
        listings_token: "test".to_string(),
        overpass_url: Url::parse(overpass_url).unwrap(),
        default_suburb: "Belmont North".to_string(),
    };
    App::new(config).expect("test app construction failed")
}

pub fn get(path: &str) -> Request {
    http::Request::builder()
        .method(http::Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

pub fn body_string(mut resp: Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut bytes)
        .expect("failed to read response body");
    String::from_utf8(bytes).expect("response body was not UTF-8")
}
