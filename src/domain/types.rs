//! Shared domain types.
//!
//! These types are kept lightweight and serializable so callers can move
//! records in and markers out through whatever format they already use.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One of the four marker sizes an emission reading can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadiusBucket {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl RadiusBucket {
    pub const ALL: [RadiusBucket; 4] = [
        RadiusBucket::Small,
        RadiusBucket::Medium,
        RadiusBucket::Large,
        RadiusBucket::ExtraLarge,
    ];

    /// Marker radius for this bucket.
    pub fn value(self) -> f64 {
        match self {
            RadiusBucket::Small => 10.0,
            RadiusBucket::Medium => 16.67,
            RadiusBucket::Large => 23.33,
            RadiusBucket::ExtraLarge => 40.0,
        }
    }

    /// Position of the bucket in ascending order (0..4).
    pub fn index(self) -> usize {
        match self {
            RadiusBucket::Small => 0,
            RadiusBucket::Medium => 1,
            RadiusBucket::Large => 2,
            RadiusBucket::ExtraLarge => 3,
        }
    }

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            RadiusBucket::Small => "small",
            RadiusBucket::Medium => "medium",
            RadiusBucket::Large => "large",
            RadiusBucket::ExtraLarge => "extra-large",
        }
    }
}

/// Ascending `(threshold, bucket)` pairs.
///
/// A reading belongs to the first bucket whose threshold it is strictly below.
/// Readings that clear every threshold (including NaN) fall through to
/// `RadiusBucket::ExtraLarge`.
pub const RADIUS_TABLE: [(f64, RadiusBucket); 3] = [
    (51_126.0, RadiusBucket::Small),
    (235_483.5677, RadiusBucket::Medium),
    (1_212_860.6667, RadiusBucket::Large),
];

/// Bucket for readings at or above the last threshold.
pub const TERMINAL_BUCKET: RadiusBucket = RadiusBucket::ExtraLarge;

/// Emission column as it arrives from a project listing.
///
/// Exports are inconsistent: some store the estimate as a number, others as
/// text. Both are accepted; text is parsed when the marker is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Emission {
    Number(f64),
    Text(String),
}

impl Emission {
    /// Numeric value, or `None` if the text form does not parse.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Emission::Number(v) => Some(*v),
            Emission::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

impl From<f64> for Emission {
    fn from(value: f64) -> Self {
        Emission::Number(value)
    }
}

/// A single carbon-offset project row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub project_id: String,
    pub project_type: Option<String>,
    /// Registry the project is listed in (e.g. `Verra`, `GoldStandard`).
    pub source: Option<String>,
    pub country: Option<String>,
    /// `"lat,lon"` in decimal degrees.
    pub geolocation: Option<String>,
    /// Estimated annual emission reductions.
    pub emissions: Option<Emission>,
}

/// A map marker derived from one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub lat: f64,
    pub lon: f64,
    pub radius: f64,
    pub project_id: String,
    pub project_type: Option<String>,
}

/// Per-key counts over the considered records.
///
/// Ordered maps keep report output stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tallies {
    pub sources: BTreeMap<String, usize>,
    pub project_types: BTreeMap<String, usize>,
    pub countries: BTreeMap<String, usize>,
}

impl Tallies {
    /// Count each non-empty field of `record`.
    pub fn record(&mut self, record: &ProjectRecord) {
        bump(&mut self.sources, record.source.as_deref());
        bump(&mut self.project_types, record.project_type.as_deref());
        bump(&mut self.countries, record.country.as_deref());
    }
}

fn bump(counts: &mut BTreeMap<String, usize>, key: Option<&str>) {
    if let Some(key) = key.filter(|k| !k.is_empty()) {
        *counts.entry(key.to_string()).or_insert(0) += 1;
    }
}

/// Output of one marker-building pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkerSet {
    /// Records that passed the source filter.
    pub rows_seen: usize,
    pub markers: Vec<Marker>,
    pub tallies: Tallies,
}
