//! Marker construction.
//!
//! A record yields a marker only when it carries a usable geolocation and an
//! emission estimate. Records that fail either check are skipped, not
//! reported as errors: listings routinely contain half-filled rows and one
//! bad row must not hide the rest of the map.
//!
//! Tallies follow the same split. A record missing its geolocation or
//! emissions is counted in `rows_seen` only; a record whose fields are
//! present but fail to parse is still tallied.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::classify::radius;
use crate::config::MarkerConfig;
use crate::domain::{Marker, MarkerSet, ProjectRecord};
use crate::error::Error;
use crate::markers::geo::parse_geolocation;

/// Records whose `source` matches one of `sources`, ignoring ASCII case.
///
/// An empty `sources` list keeps every record.
pub fn filter_by_source<'a>(records: &'a [ProjectRecord], sources: &[String]) -> Vec<&'a ProjectRecord> {
    records
        .iter()
        .filter(|r| source_matches(r, sources))
        .collect()
}

fn source_matches(record: &ProjectRecord, sources: &[String]) -> bool {
    if sources.is_empty() {
        return true;
    }
    match record.source.as_deref() {
        Some(source) => sources.iter().any(|s| s.eq_ignore_ascii_case(source)),
        None => false,
    }
}

/// Build markers and tallies for `records` under `config`.
pub fn build_markers(records: &[ProjectRecord], config: &MarkerConfig) -> Result<MarkerSet, Error> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut set = MarkerSet::default();
    for record in filter_by_source(records, &config.sources) {
        set.rows_seen += 1;

        match marker_for(record, config.jitter, &mut rng) {
            Ok(marker) => {
                set.tallies.record(record);
                set.markers.push(marker);
            }
            Err(Skip::Unparsable(reason)) => {
                set.tallies.record(record);
                trace!(project_id = %record.project_id, reason, "skipped marker");
            }
            Err(Skip::Incomplete(reason)) => {
                trace!(project_id = %record.project_id, reason, "skipped marker, not tallied");
            }
        }
    }

    debug!(
        records = records.len(),
        considered = set.rows_seen,
        markers = set.markers.len(),
        "built markers"
    );
    Ok(set)
}

/// Why a record produced no marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Skip {
    /// Geolocation or emissions absent; the record is not tallied.
    Incomplete(&'static str),
    /// Fields present but not parsable; the record is still tallied.
    Unparsable(&'static str),
}

fn marker_for(record: &ProjectRecord, jitter: f64, rng: &mut StdRng) -> Result<Marker, Skip> {
    let geolocation = record
        .geolocation
        .as_deref()
        .filter(|g| g.contains(','))
        .ok_or(Skip::Incomplete("missing geolocation"))?;
    let emissions = record
        .emissions
        .as_ref()
        .ok_or(Skip::Incomplete("missing emissions"))?;

    let emissions = emissions
        .as_f64()
        .ok_or(Skip::Unparsable("unparsable emissions"))?;
    let (lat, lon) =
        parse_geolocation(geolocation).ok_or(Skip::Unparsable("unparsable geolocation"))?;

    // Same offset on both axes.
    let offset = if jitter > 0.0 { rng.gen_range(-jitter..jitter) } else { 0.0 };

    Ok(Marker {
        lat: lat + offset,
        lon: lon + offset,
        radius: radius(emissions),
        project_id: record.project_id.clone(),
        project_type: record.project_type.clone(),
    })
}
