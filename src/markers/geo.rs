//! Geolocation text parsing.

/// Parse `"lat,lon"` into decimal degrees.
///
/// The text is split at the first comma and each half is trimmed. Anything
/// that does not parse as two floats (missing comma, extra comma, empty half)
/// yields `None`. Ranges are not checked.
pub fn parse_geolocation(text: &str) -> Option<(f64, f64)> {
    let (lat, lon) = text.split_once(',')?;
    let lat = lat.trim().parse::<f64>().ok()?;
    let lon = lon.trim().parse::<f64>().ok()?;
    Some((lat, lon))
}
