pub mod client;
pub mod error;
pub mod models;
pub mod normalize;

pub use client::ListingsClient;
pub use error::UpstreamError;
pub use models::RawListing;
pub use normalize::{format_price, normalize, NormalizedListing};
