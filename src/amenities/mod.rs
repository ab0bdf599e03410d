pub mod client;
pub mod models;

pub use client::{classify, AmenityClient, DEFAULT_RADIUS_M};
pub use models::{AmenityBuckets, AmenityRecord};
