//! Project records → map markers.
//!
//! - registry filtering (`filter_by_source`)
//! - `"lat,lon"` parsing (`geo`)
//! - marker construction, jitter and tallies (`builder`)

pub mod builder;
pub mod geo;

pub use builder::*;
pub use geo::*;
