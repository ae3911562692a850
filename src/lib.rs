//! `emission-radius` library crate.
//!
//! Maps project emission estimates to one of four marker radii and turns
//! project listings into map markers:
//!
//! - `classify`: the threshold rule, per reading and per batch
//! - `markers`: registry filtering, geolocation parsing, jitter, tallies
//! - `report`: plain-text run summaries
//!
//! Nothing here performs I/O; records come in as values and markers go out
//! as values.

pub mod classify;
pub mod config;
pub mod domain;
pub mod error;
pub mod markers;
pub mod report;

pub use classify::{bucket_for, classify_batch, classify_batch_par, classify_into, radius};
pub use config::MarkerConfig;
pub use domain::{Emission, Marker, MarkerSet, ProjectRecord, RadiusBucket, Tallies};
pub use error::{Error, ErrorKind};
pub use markers::build_markers;
