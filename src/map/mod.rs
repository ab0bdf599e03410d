pub mod artifact;
pub mod builder;

pub use artifact::{MapArtifact, Marker, MarkerKind};
pub use builder::{build_map, centroid, price_color, DEFAULT_CENTER, DEFAULT_ZOOM};
