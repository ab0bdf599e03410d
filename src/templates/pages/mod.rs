pub mod index;

pub use index::{index_page, map_placeholder_page};
