//! Domain types shared by the classifier and the marker builder.
//!
//! This module defines:
//!
//! - the radius buckets and their threshold table (`RadiusBucket`, `RADIUS_TABLE`)
//! - project inputs (`ProjectRecord`, `Emission`)
//! - marker outputs (`Marker`, `Tallies`, `MarkerSet`)

pub mod types;

pub use types::*;
