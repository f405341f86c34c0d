//! Tour extraction from solved edge values.

mod extract;

pub use extract::extract_tours;
