mod utils;

mod map_tests;
mod normalize_tests;
