//! Emission → radius classification.
//!
//! The classifier relies on one primitive: scan `RADIUS_TABLE` in ascending
//! order and take the first bucket whose threshold the reading is strictly
//! below. Everything in `batch` is that primitive applied element-wise.
//!
//! Boundaries belong to the upper bucket (`51126.0` is medium, not small).
//! NaN compares false against every threshold and therefore lands in the
//! terminal bucket.

pub mod batch;

pub use batch::*;

use crate::domain::{RADIUS_TABLE, RadiusBucket, TERMINAL_BUCKET};

/// Bucket for a single emission reading.
pub fn bucket_for(emission: f64) -> RadiusBucket {
    for (threshold, bucket) in RADIUS_TABLE {
        if emission < threshold {
            return bucket;
        }
    }
    TERMINAL_BUCKET
}

/// Marker radius for a single emission reading.
pub fn radius(emission: f64) -> f64 {
    bucket_for(emission).value()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_first_threshold_is_small() {
        assert_eq!(radius(0.0), 10.0);
        assert_eq!(radius(51_125.9), 10.0);
        assert_eq!(radius(-1.0e12), 10.0);
        assert_eq!(radius(f64::NEG_INFINITY), 10.0);
    }

    #[test]
    fn thresholds_belong_to_the_upper_bucket() {
        assert_eq!(bucket_for(51_126.0), RadiusBucket::Medium);
        assert_eq!(bucket_for(235_483.5677), RadiusBucket::Large);
        assert_eq!(bucket_for(1_212_860.6667), RadiusBucket::ExtraLarge);
    }

    #[test]
    fn interior_values() {
        assert_eq!(radius(100_000.0), 16.67);
        assert_eq!(radius(1_000_000.0), 23.33);
        assert_eq!(radius(1.0e9), 40.0);
        assert_eq!(radius(f64::INFINITY), 40.0);
    }

    #[test]
    fn just_below_each_threshold_stays_in_lower_bucket() {
        for (threshold, bucket) in RADIUS_TABLE {
            let below = f64::from_bits(threshold.to_bits() - 1);
            assert_eq!(bucket_for(below), bucket, "threshold {threshold}");
        }
    }

    #[test]
    fn nan_falls_through_to_terminal_bucket() {
        // NaN fails every `<` comparison; this is kept on purpose.
        assert_eq!(bucket_for(f64::NAN), RadiusBucket::ExtraLarge);
        assert_eq!(radius(f64::NAN), 40.0);
    }
}
